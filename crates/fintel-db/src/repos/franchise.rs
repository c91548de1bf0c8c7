//! Franchise catalog reads. Public: no identity required.

use fintel_core::entities::FranchiseBrand;
use fintel_core::enums::SortKey;

use crate::error::DatabaseError;
use crate::helpers::{BRAND_COLUMNS, row_to_brand};
use crate::query::{FranchiseQuery, order_clause};
use crate::service::FintelService;

impl FintelService {
    /// List brands matching the query's filters in its sort order.
    pub async fn list_franchises(
        &self,
        query: &FranchiseQuery,
    ) -> Result<Vec<FranchiseBrand>, DatabaseError> {
        let (where_sql, mut params) = query.where_clause();
        let mut sql = format!(
            "SELECT {BRAND_COLUMNS} FROM franchise_brands{where_sql} ORDER BY {}",
            order_clause(query.sort)
        );
        if let Some(limit) = query.sql_limit() {
            params.push(libsql::Value::Integer(i64::from(limit)));
            sql.push_str(&format!(" LIMIT ?{}", params.len()));
        }

        let mut rows = self
            .db()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut brands = Vec::new();
        while let Some(row) = rows.next().await? {
            let brand = row_to_brand(&row, 0)?;
            if query.matches_search(&brand) {
                brands.push(brand);
            }
        }
        if let Some(limit) = query.limit {
            brands.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(brands)
    }

    pub async fn get_franchise(&self, id: &str) -> Result<FranchiseBrand, DatabaseError> {
        let sql = format!("SELECT {BRAND_COLUMNS} FROM franchise_brands WHERE id = ?1");
        let mut rows = self.db().query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => row_to_brand(&row, 0),
            None => Err(DatabaseError::NotFound {
                entity_type: "Franchise",
                id: id.to_string(),
            }),
        }
    }

    /// First `limit` brands of the name-sorted catalog.
    pub async fn featured_franchises(
        &self,
        limit: u32,
    ) -> Result<Vec<FranchiseBrand>, DatabaseError> {
        self.list_franchises(&FranchiseQuery::new().sort(SortKey::Name).limit(limit))
            .await
    }
}
