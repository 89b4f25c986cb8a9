/// Explicit unit-of-work boundary for multi-step repository writes.
///
/// Diesel's closure-based `Connection::transaction` decides commit vs
/// rollback from the closure result; here the repository owns that decision
/// so a unit of work can span several statements and still have exactly one
/// finalization point. [`finish`] guarantees one of {commit, rollback} is
/// attempted, never both, and that the business error is what the caller
/// sees when rollback succeeds.
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::pg::PgConnection;

use crate::log_error;
use crate::shared::errors::{AppError, AppResult};

pub fn begin(conn: &mut PgConnection) -> AppResult<()> {
    AnsiTransactionManager::begin_transaction(conn)
        .map_err(|e| AppError::TransactionError(format!("Failed to begin transaction: {}", e)))
}

/// Finalize a unit of work.
///
/// * business result `Ok`: attempt commit; a commit failure is returned as
///   [`AppError::TransactionError`].
/// * business result `Err`: roll back and return the original error. Only
///   when rollback itself fails does that failure supersede it.
pub fn finish<T>(conn: &mut PgConnection, result: AppResult<T>) -> AppResult<T> {
    match result {
        Ok(value) => match AnsiTransactionManager::commit_transaction(conn) {
            Ok(()) => Ok(value),
            Err(e) => Err(AppError::TransactionError(format!(
                "Failed to commit transaction: {}",
                e
            ))),
        },
        Err(business_err) => match AnsiTransactionManager::rollback_transaction(conn) {
            Ok(()) => Err(business_err),
            Err(rollback_err) => {
                log_error!(
                    "Rollback failed after business error '{}': {}",
                    business_err,
                    rollback_err
                );
                Err(AppError::TransactionError(format!(
                    "Failed to roll back transaction: {}",
                    rollback_err
                )))
            }
        },
    }
}
