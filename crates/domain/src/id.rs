//! Typed identifier newtypes backed by UUIDs.
//!
//! Parsing only accepts the canonical hyphenated `8-4-4-4-12` form. The
//! simple, braced and URN spellings that [`uuid::Uuid::parse_str`] would
//! otherwise allow are rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of the hyphenated `8-4-4-4-12` textual form.
const HYPHENATED_LEN: usize = 36;

/// The text could not be parsed as a canonical hyphenated UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not a UUID in 8-4-4-4-12 hexadecimal form")]
pub struct ParseIdError {
    pub value: String,
}

/// Parse a UUID, accepting only the hyphenated form (either case).
///
/// # Errors
///
/// Returns [`ParseIdError`] when the text is not exactly a hyphenated UUID.
pub fn parse_hyphenated(s: &str) -> Result<uuid::Uuid, ParseIdError> {
    if s.len() != HYPHENATED_LEN {
        return Err(ParseIdError {
            value: s.to_string(),
        });
    }
    uuid::Uuid::try_parse(s).map_err(|_| ParseIdError {
        value: s.to_string(),
    })
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hyphenated(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`HandyModel`](crate::handy_model::HandyModel).
    HandyModelId
);

define_id!(
    /// Identifier of the brand (*Handymarke*) a phone model belongs to.
    BrandId
);
