//! Error types
//!
//! Defines the failure taxonomy for the backing credential store.

use std::error::Error;
use std::fmt;

/// Storage access errors
///
/// Both outcomes wrap the underlying cause; the verifier surfaces them to
/// the caller without retries or recovery.
#[derive(Debug)]
pub enum StorageError {
    /// The database driver could not be initialized from the given
    /// connect options.
    DriverUnavailable(String),
    /// The connection could not be established or the query failed.
    QueryExecutionFailure(sqlx::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DriverUnavailable(msg) => {
                write!(f, "Database driver unavailable: {}", msg)
            }
            StorageError::QueryExecutionFailure(e) => {
                write!(f, "Credential lookup failed: {}", e)
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StorageError::DriverUnavailable(_) => None,
            StorageError::QueryExecutionFailure(e) => Some(e),
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Configuration(e) => StorageError::DriverUnavailable(e.to_string()),
            other => StorageError::QueryExecutionFailure(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_driver_unavailable() {
        let err = StorageError::DriverUnavailable("bad options".to_string());
        assert_eq!(err.to_string(), "Database driver unavailable: bad options");
    }

    #[test]
    fn test_configuration_error_maps_to_driver_unavailable() {
        let err: StorageError = sqlx::Error::Configuration("bad url".into()).into();
        assert!(matches!(err, StorageError::DriverUnavailable(_)));
    }

    #[test]
    fn test_query_error_keeps_source() {
        let err: StorageError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StorageError::QueryExecutionFailure(_)));
        assert!(err.source().is_some());
    }
}
