//! # fintel-db
//!
//! libSQL data access for Franchise Intel.
//!
//! Holds the franchise catalog, owner-scoped collections and comparisons,
//! and insight articles. Works against a local file (or `:memory:` in
//! tests) or a remote libSQL database.
//!
//! Every collection and comparison method goes through
//! [`service::FintelService::owner_id`]: without an identity those
//! operations fail with [`error::DatabaseError::NotAuthenticated`], and with
//! one they only ever see rows owned by that user.

pub mod error;
pub mod fallback;
pub mod helpers;
mod migrations;
pub mod query;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and its single connection.
pub struct FintelDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl FintelDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let fintel_db = Self {
            db,
            conn,
            remote: false,
        };
        fintel_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(fintel_db)
    }

    /// Open a remote libSQL database.
    ///
    /// The remote schema belongs to the deployment, so no migrations run
    /// here. Deployments that still use the legacy table names are handled
    /// by [`fallback`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "opened remote database");
        Ok(Self {
            db,
            conn,
            remote: true,
        })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run a statement that returns rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the backend message on failure.
    pub async fn query(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        tracing::debug!(sql, "query");
        Ok(self.conn.query(sql, params).await?)
    }

    /// Run a statement and return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` with the backend message on failure.
    pub async fn execute(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<u64, DatabaseError> {
        tracing::debug!(sql, "execute");
        Ok(self.conn.execute(sql, params).await?)
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL. Returns e.g. `"col-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> FintelDb {
        FintelDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "franchise_brands",
            "collections",
            "collection_items",
            "franchise_comparisons",
            "industry_insights",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("col").await.unwrap();
        assert!(id.starts_with("col-"), "ID should start with 'col-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in fintel_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn collection_items_unique_per_pair() {
        let db = test_db().await;
        let conn = db.conn();
        conn.execute(
            "INSERT INTO franchise_brands (id, name, sector) VALUES ('brd-1', 'Subway', 'Food & Beverage')",
            (),
        )
        .await
        .unwrap();
        conn.execute(
            "INSERT INTO collections (id, user_id, name) VALUES ('col-1', 'user-a', 'Food')",
            (),
        )
        .await
        .unwrap();
        conn.execute(
            "INSERT INTO collection_items (id, collection_id, brand_id) VALUES ('itm-1', 'col-1', 'brd-1')",
            (),
        )
        .await
        .unwrap();

        let duplicate = conn
            .execute(
                "INSERT INTO collection_items (id, collection_id, brand_id) VALUES ('itm-2', 'col-1', 'brd-1')",
                (),
            )
            .await;
        assert!(duplicate.is_err(), "duplicate pair should be rejected");
    }
}
