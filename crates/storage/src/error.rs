use thiserror::Error;

/// Error type of the underlying MySQL driver.
pub use sqlx::Error as DriverError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// True when the store could not be reached at all, as opposed to a
    /// statement failing on a live connection.
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            StorageError::Database(
                sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Configuration(_)
            )
        )
    }

    /// The underlying driver message, without the variant prefix.
    pub fn detail(&self) -> String {
        match self {
            StorageError::Database(e) => e.to_string(),
            StorageError::NotFound => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_timeout_is_a_connection_failure() {
        assert!(StorageError::Database(sqlx::Error::PoolTimedOut).is_connection_failure());
        assert!(StorageError::Database(sqlx::Error::PoolClosed).is_connection_failure());
    }

    #[test]
    fn test_statement_errors_are_not_connection_failures() {
        let err = StorageError::Database(sqlx::Error::Protocol("bad packet".to_string()));
        assert!(!err.is_connection_failure());
        assert!(!StorageError::NotFound.is_connection_failure());
    }

    #[test]
    fn test_detail_exposes_driver_message() {
        let err = StorageError::Database(sqlx::Error::Protocol("bad packet".to_string()));
        assert!(err.detail().contains("bad packet"));
        assert!(!err.detail().starts_with("Database error"));
    }
}
