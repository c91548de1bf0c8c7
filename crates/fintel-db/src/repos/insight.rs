//! Industry insight articles. Public reads.

use fintel_core::entities::InsightArticle;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::service::FintelService;

const SELECT_COLS: &str = "id, title, content, category, created_at";

fn row_to_insight(row: &libsql::Row) -> Result<InsightArticle, DatabaseError> {
    Ok(InsightArticle {
        id: row.get::<String>(0)?,
        title: row.get::<String>(1)?,
        content: row.get::<String>(2)?,
        category: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl FintelService {
    /// All insight articles, newest first.
    pub async fn list_insights(&self) -> Result<Vec<InsightArticle>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM industry_insights ORDER BY created_at DESC, rowid DESC"
        );
        let mut rows = self.db().query(&sql, ()).await?;
        let mut insights = Vec::new();
        while let Some(row) = rows.next().await? {
            insights.push(row_to_insight(&row)?);
        }
        Ok(insights)
    }

    pub async fn get_insight(&self, id: &str) -> Result<InsightArticle, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM industry_insights WHERE id = ?1");
        let mut rows = self.db().query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => row_to_insight(&row),
            None => Err(DatabaseError::NotFound {
                entity_type: "Insight",
                id: id.to_string(),
            }),
        }
    }
}
