use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Entry store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Turns unique and foreign key violations into a `ConstraintViolation`
    /// carrying `message`; every other error passes through untouched.
    pub fn with_constraint_message(self, message: &str) -> Self {
        if self.is_unique_violation() || self.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            self
        }
    }

    /// Reports lost connectivity to the database as `StoreUnavailable`.
    pub fn unavailable_if_disconnected(self) -> Self {
        match self {
            StorageError::Database(
                e @ (sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)),
            ) => StorageError::StoreUnavailable(e.to_string()),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_unavailable() {
        let error = StorageError::from(sqlx::Error::PoolTimedOut).unavailable_if_disconnected();
        assert!(matches!(error, StorageError::StoreUnavailable(_)));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let error = StorageError::from(sqlx::Error::RowNotFound).unavailable_if_disconnected();
        assert!(matches!(error, StorageError::Database(sqlx::Error::RowNotFound)));

        let error = StorageError::NotFound.with_constraint_message("duplicate");
        assert!(matches!(error, StorageError::NotFound));
    }
}
