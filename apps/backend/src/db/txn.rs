use futures::future::BoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the application pool, runs the closure, commits
/// on Ok and rolls back on Err. The rollback on the error path is
/// best-effort; the original error is preserved.
///
/// The closure returns a boxed future so it can borrow the transaction:
///
/// ```ignore
/// with_txn(&state, |txn| Box::pin(async move { ... })).await
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>,
{
    let db = require_db(state)?;
    let txn = db
        .begin()
        .await
        .map_err(|e| AppError::db(format!("failed to begin transaction: {e}")))?;

    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit()
                .await
                .map_err(|e| AppError::db(format!("failed to commit transaction: {e}")))?;
            Ok(val)
        }
        Err(err) => {
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
