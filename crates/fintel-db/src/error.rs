//! Database error types for fintel-db.

use fintel_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data. Displays the backend
    /// message unchanged.
    #[error("{0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// An owner-scoped lookup matched nothing visible to the current user.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },

    /// An owner-scoped operation was attempted without an identity.
    #[error("User not authenticated")]
    NotAuthenticated,

    /// Input rejected before any SQL ran.
    #[error("{0}")]
    Validation(String),

    /// Underlying libSQL error, displayed verbatim.
    #[error(transparent)]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    /// Whether this error reports that `table` does not exist.
    ///
    /// Matches the `SQLite` wording (`no such table: x`, `no such table: main.x`)
    /// and the Postgres wording (`relation "x" does not exist`).
    #[must_use]
    pub fn is_missing_table(&self, table: &str) -> bool {
        let message = match self {
            Self::LibSql(error) => error.to_string(),
            Self::Query(message) => message.clone(),
            _ => return false,
        };
        message.contains(&format!("no such table: {table}"))
            || message.contains(&format!("no such table: main.{table}"))
            || message.contains(&format!("relation \"{table}\" does not exist"))
            || message.contains(&format!("relation \"public.{table}\" does not exist"))
    }
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::Validation(message),
            other => Self::Query(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_matches_sqlite_and_postgres_wording() {
        let sqlite = DatabaseError::Query("SQLite failure: `no such table: collections`".into());
        assert!(sqlite.is_missing_table("collections"));
        assert!(!sqlite.is_missing_table("collection_items"));

        let fk = DatabaseError::Query("no such table: main.collections".into());
        assert!(fk.is_missing_table("collections"));

        let pg = DatabaseError::Query("relation \"public.collections\" does not exist".into());
        assert!(pg.is_missing_table("collections"));
    }

    #[test]
    fn other_errors_are_not_missing_tables() {
        assert!(!DatabaseError::NoResult.is_missing_table("collections"));
        assert!(!DatabaseError::NotAuthenticated.is_missing_table("collections"));
        let unique = DatabaseError::Query("UNIQUE constraint failed: collections.id".into());
        assert!(!unique.is_missing_table("collections"));
    }

    #[test]
    fn backend_messages_display_without_prefix() {
        let err = DatabaseError::Query("UNIQUE constraint failed: collections.id".into());
        assert_eq!(err.to_string(), "UNIQUE constraint failed: collections.id");
    }

    #[tokio::test]
    async fn libsql_error_displays_verbatim() {
        let db = crate::FintelDb::open_local(":memory:").await.unwrap();
        let err = db.query("SELECT * FROM nowhere", ()).await.unwrap_err();
        let DatabaseError::LibSql(source) = &err else {
            panic!("expected a libSQL error, got {err:?}");
        };
        assert_eq!(err.to_string(), source.to_string());
        assert!(err.to_string().contains("no such table: nowhere"));
    }

    #[test]
    fn validation_core_error_keeps_message() {
        let err: DatabaseError = CoreError::validation("Collection name is required").into();
        assert_eq!(err.to_string(), "Collection name is required");
    }
}
