//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use handyhub_domain::error::{HandyError, ValidationError};

/// JSON error body returned for validation and storage failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HandyError`] to an HTTP response with appropriate status code.
///
/// Forbidden and not-found outcomes carry an empty body.
#[derive(Debug)]
pub struct ApiError(HandyError);

impl From<HandyError> for ApiError {
    fn from(err: HandyError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            HandyError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            HandyError::Forbidden(_) => StatusCode::FORBIDDEN.into_response(),
            HandyError::NotFound(_) => StatusCode::GONE.into_response(),
            HandyError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handyhub_domain::access::{AccessTier, Action};
    use handyhub_domain::error::{ForbiddenError, NotFoundError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let resp = ApiError::from(ValidationError::EmptyName).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_forbidden_to_403() {
        let err = HandyError::from(ForbiddenError {
            tier: AccessTier::Guest,
            action: Action::List,
        });
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn should_map_not_found_to_gone() {
        let err = HandyError::from(NotFoundError {
            entity: "HandyModel",
            id: "x".to_string(),
        });
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::GONE);
    }

    #[test]
    fn should_map_storage_to_internal_server_error() {
        let err = HandyError::Storage("disk on fire".into());
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
