//! Labelled store-mutation batches with an explicit failure policy.

use futures::future::BoxFuture;
use shopmedic_store::StoreError;
use tracing::warn;

/// What to do with the rest of a batch after one mutation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Record the failure and keep going (policy pages: every document is
    /// attempted regardless of earlier failures).
    Continue,
    /// Stop at the first failure (product update: atomic from the flow's
    /// point of view).
    Abort,
}

/// Run labelled mutations in order, collecting successes and error strings.
///
/// Mutations are awaited sequentially; nothing runs concurrently. The label
/// prefixes the error message so a caller can tell which operation failed.
pub async fn apply_mutations<'a, T>(
    ops: Vec<(String, BoxFuture<'a, Result<T, StoreError>>)>,
    on_error: OnError,
) -> (Vec<T>, Vec<String>) {
    let mut applied = Vec::new();
    let mut errors = Vec::new();
    for (label, op) in ops {
        match op.await {
            Ok(value) => applied.push(value),
            Err(e) => {
                warn!(label = %label, error = %e, "store mutation failed");
                errors.push(format!("{label}: {e}"));
                if on_error == OnError::Abort {
                    break;
                }
            }
        }
    }
    (applied, errors)
}
