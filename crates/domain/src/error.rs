//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`HandyError`]
//! via `#[from]`.

use crate::access::{AccessTier, Action};
use crate::id::ParseIdError;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum HandyError {
    /// Input failed a shape or invariant check.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The caller's access tier does not allow the requested action.
    #[error("forbidden")]
    Forbidden(#[from] ForbiddenError),

    /// The referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed; the cause is opaque to the core.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Malformed input, rejected before any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("`{field}` is required")]
    MissingId { field: &'static str },

    #[error("`{field}` is malformed: {source}")]
    MalformedId {
        field: &'static str,
        #[source]
        source: ParseIdError,
    },
}

/// Access denied for a given tier and action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{tier} may not {action}")]
pub struct ForbiddenError {
    pub tier: AccessTier,
    pub action: Action,
}

/// A lookup by id found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_forbidden_error() {
        let err = ForbiddenError {
            tier: AccessTier::User,
            action: Action::Create,
        };
        assert_eq!(err.to_string(), "user may not create");
    }

    #[test]
    fn should_describe_not_found_error() {
        let err = NotFoundError {
            entity: "HandyModel",
            id: "11111111-1111-1111-1111-111111111111".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HandyModel `11111111-1111-1111-1111-111111111111` not found"
        );
    }

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: HandyError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            HandyError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_name_field_in_missing_id_message() {
        let err = ValidationError::MissingId { field: "uuid" };
        assert_eq!(err.to_string(), "`uuid` is required");
    }
}
