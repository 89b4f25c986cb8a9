use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Reconstruction error: {0}")]
    ReconstructionError(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => AppError::NotFound("Record not found in database".to_string()),
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                AppError::NotFound(format!(
                    "Referenced record does not exist: {}",
                    info.message()
                ))
            }
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                AppError::ValidationError(format!("Record already exists: {}", info.message()))
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::InternalError(format!("Missing environment variable: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether a caller may safely retry the failed operation.
    ///
    /// Only pool/connectivity failures qualify, and only for read-only or
    /// otherwise idempotent operations. A failed commit is never retried:
    /// its outcome is unknown and a retry risks duplicate effects.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn transaction_errors_are_not_retryable() {
        assert!(!AppError::TransactionError("commit failed".into()).is_retryable());
        assert!(AppError::DatabaseError("connection reset".into()).is_retryable());
    }
}
