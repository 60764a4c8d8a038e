//! Access tiers: the coarse permission levels a caller can hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ForbiddenError;

/// Permission tier of a caller.
///
/// Ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    /// Unauthenticated caller; blocked from everything.
    Guest,
    /// Read-only access (list, read).
    User,
    /// Full create, read, update and delete access.
    Elevated,
}

/// Operation a caller attempts on the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    /// Whether this action modifies stored data.
    #[must_use]
    pub fn is_write(self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }
}

impl AccessTier {
    #[must_use]
    pub fn can_read(self) -> bool {
        self >= Self::User
    }

    #[must_use]
    pub fn can_write(self) -> bool {
        self == Self::Elevated
    }

    /// Check that this tier may perform `action`.
    ///
    /// # Errors
    ///
    /// Returns [`ForbiddenError`] when the tier is insufficient.
    pub fn authorize(self, action: Action) -> Result<(), ForbiddenError> {
        let allowed = if action.is_write() {
            self.can_write()
        } else {
            self.can_read()
        };
        if allowed {
            Ok(())
        } else {
            Err(ForbiddenError { tier: self, action })
        }
    }
}

impl fmt::Display for AccessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Guest => "guest",
            Self::User => "user",
            Self::Elevated => "elevated",
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::List => "list",
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        })
    }
}
