//! Legacy table-name fallback.
//!
//! Older deployments stored collections in `user_collections`. Every
//! operation on the collections table runs against the current name first
//! and, if the backend reports that table missing, retries exactly once
//! against the legacy name. Any other error is returned unchanged.

use std::future::Future;

use crate::error::DatabaseError;

/// A table with a current name and the name older deployments used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableNames {
    pub primary: &'static str,
    pub legacy: &'static str,
}

// TODO: drop the user_collections fallback once every deployment has run the
// rename to `collections`.
pub const COLLECTIONS: TableNames = TableNames {
    primary: "collections",
    legacy: "user_collections",
};

/// Run `op` against the primary table, retrying once against the legacy
/// table when the primary is missing.
///
/// # Errors
///
/// Returns the error from the primary attempt unless it was a missing-table
/// error, in which case the legacy attempt's result is returned.
pub async fn with_legacy_fallback<T, F, Fut>(
    names: TableNames,
    mut op: F,
) -> Result<T, DatabaseError>
where
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<T, DatabaseError>>,
{
    match op(names.primary).await {
        Err(error) if error.is_missing_table(names.primary) => {
            tracing::warn!(
                primary = names.primary,
                legacy = names.legacy,
                "table missing, retrying against legacy name"
            );
            op(names.legacy).await
        }
        other => other,
    }
}
