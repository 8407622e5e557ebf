//! Async submission helpers on the tokio runtime.
//!
//! Computations run on tokio's blocking pool. Completion order between
//! separately submitted computations is unspecified, and cancellation follows
//! tokio's `JoinHandle` semantics.

use anukit_core::{Error, Outcome, Result, try_wrap};
use tracing::warn;

/// Run `supplier` on the blocking pool and await its value.
///
/// # Errors
///
/// Returns [`Error::TaskFailed`] if the task panicked or was cancelled.
pub async fn run_async<T, F>(supplier: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(supplier).await.map_err(|e| {
        warn!(cancelled = e.is_cancelled(), "Async task did not complete");
        Error::task_failed(e.to_string())
    })
}

/// Run a fallible computation on the blocking pool, capturing any failure.
///
/// A task that never completes is captured as `ERR` as well.
pub async fn try_wrap_async<T, X, F>(supplier: F) -> Outcome<T, Error>
where
    F: FnOnce() -> std::result::Result<T, X> + Send + 'static,
    T: Send + 'static,
    X: Into<Error>,
{
    match run_async(move || try_wrap(supplier)).await {
        Ok(outcome) => outcome,
        Err(e) => Outcome::err(e),
    }
}
