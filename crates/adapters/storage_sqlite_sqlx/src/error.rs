//! Storage-specific error type wrapping sqlx errors.

use handyhub_domain::error::HandyError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for HandyError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_opaque_storage_error() {
        let err: HandyError = StorageError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, HandyError::Storage(_)));
    }
}
