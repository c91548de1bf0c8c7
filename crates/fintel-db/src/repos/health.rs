//! Connection check: row counts per logical table.

use serde::Serialize;

use crate::error::DatabaseError;
use crate::fallback::{COLLECTIONS, with_legacy_fallback};
use crate::service::FintelService;

const TABLES: &[&str] = &[
    "franchise_brands",
    "collections",
    "collection_items",
    "franchise_comparisons",
    "industry_insights",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub table: String,
    pub ok: bool,
    pub count: Option<i64>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionReport {
    pub tables: Vec<TableStatus>,
    pub total_records: i64,
}

impl ConnectionReport {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.tables.iter().all(|t| t.ok)
    }
}

impl FintelService {
    /// Count rows in every table. A failing table is reported, not raised.
    ///
    /// Counts are whole-table, not owner-scoped: this is a connectivity
    /// probe, and a remote deployment's own access rules still apply.
    pub async fn check_connection(&self) -> ConnectionReport {
        let mut tables = Vec::with_capacity(TABLES.len());
        for &table in TABLES {
            let result = if table == COLLECTIONS.primary {
                with_legacy_fallback(COLLECTIONS, |name| self.count_rows(name)).await
            } else {
                self.count_rows(table).await
            };
            tables.push(match result {
                Ok(count) => TableStatus {
                    table: table.to_string(),
                    ok: true,
                    count: Some(count),
                    error: None,
                },
                Err(error) => {
                    tracing::warn!(table, %error, "connection check failed");
                    TableStatus {
                        table: table.to_string(),
                        ok: false,
                        count: None,
                        error: Some(error.to_string()),
                    }
                }
            });
        }
        let total_records = tables.iter().filter_map(|t| t.count).sum();
        ConnectionReport {
            tables,
            total_records,
        }
    }

    async fn count_rows(&self, table: &str) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT COUNT(*) FROM {table}");
        let mut rows = self.db().query(&sql, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{
        BrandSeed, seed_brand, test_service_as, use_legacy_collections_table,
    };

    #[tokio::test]
    async fn report_counts_every_table() {
        let svc = test_service_as("user-a").await;
        seed_brand(&svc, BrandSeed::new("Subway")).await;
        svc.create_collection("Food", None).await.unwrap();

        let report = svc.check_connection().await;
        assert!(report.is_healthy());
        assert_eq!(report.tables.len(), 5);
        assert_eq!(report.total_records, 2);
        assert_eq!(report.tables[0].count, Some(1));
    }

    #[tokio::test]
    async fn collections_count_uses_legacy_table() {
        let svc = test_service_as("user-a").await;
        use_legacy_collections_table(&svc).await;
        svc.create_collection("Food", None).await.unwrap();

        let report = svc.check_connection().await;
        let collections = report
            .tables
            .iter()
            .find(|t| t.table == "collections")
            .unwrap();
        assert!(collections.ok);
        assert_eq!(collections.count, Some(1));
    }

    #[tokio::test]
    async fn missing_table_is_reported_not_raised() {
        let svc = test_service_as("user-a").await;
        svc.db()
            .execute("DROP TABLE industry_insights", ())
            .await
            .unwrap();

        let report = svc.check_connection().await;
        assert!(!report.is_healthy());
        let insights = report.tables.last().unwrap();
        assert!(!insights.ok);
        assert!(insights.error.as_deref().unwrap().contains("industry_insights"));
    }
}
