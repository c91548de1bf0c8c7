//! Catalog import: the maintenance path that writes brands and insight
//! articles from a JSON seed file. Rows are upserted by id, so re-importing
//! the same file updates in place.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use fintel_core::entities::{FranchiseBrand, InsightArticle, NewFranchiseBrand, NewInsightArticle};
use fintel_core::enums::Sector;
use fintel_core::ids::{PREFIX_BRAND, PREFIX_INSIGHT};

use crate::error::DatabaseError;
use crate::helpers::{now, opt_real, opt_text, timestamp};
use crate::service::FintelService;

/// Contents of a seed file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogSeed {
    #[serde(default)]
    pub brands: Vec<NewFranchiseBrand>,
    #[serde(default)]
    pub insights: Vec<NewInsightArticle>,
}

impl CatalogSeed {
    /// Parse a seed file body.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the JSON does not match the seed shape.
    pub fn from_json(body: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(body)
            .map_err(|e| DatabaseError::Validation(format!("Invalid catalog seed: {e}")))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub brands: usize,
    pub insights: usize,
}

impl FintelService {
    /// Upsert every brand and insight in the seed.
    pub async fn import_catalog(&self, seed: &CatalogSeed) -> Result<ImportSummary, DatabaseError> {
        let mut summary = ImportSummary::default();
        for brand in &seed.brands {
            self.upsert_brand(brand).await?;
            summary.brands += 1;
        }
        for insight in &seed.insights {
            self.upsert_insight(insight).await?;
            summary.insights += 1;
        }
        tracing::info!(brands = summary.brands, insights = summary.insights, "imported catalog");
        Ok(summary)
    }

    /// Insert or update one brand. `created_at` is kept on update.
    pub async fn upsert_brand(
        &self,
        brand: &NewFranchiseBrand,
    ) -> Result<FranchiseBrand, DatabaseError> {
        if brand.name.trim().is_empty() {
            return Err(DatabaseError::Validation("Brand name is required".into()));
        }
        if brand.sector.parse::<Sector>().is_err() {
            tracing::warn!(name = %brand.name, sector = %brand.sector, "brand has an unknown sector");
        }

        let id = match &brand.id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => self.db().generate_id(PREFIX_BRAND).await?,
        };
        self.db()
            .execute(
                "INSERT INTO franchise_brands (id, name, sector, description, logo_url, website,
                     startup_cost_min, startup_cost_max, net_profit_margin, summary_pdf_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                 ON CONFLICT(id) DO UPDATE SET
                     name = excluded.name,
                     sector = excluded.sector,
                     description = excluded.description,
                     logo_url = excluded.logo_url,
                     website = excluded.website,
                     startup_cost_min = excluded.startup_cost_min,
                     startup_cost_max = excluded.startup_cost_max,
                     net_profit_margin = excluded.net_profit_margin,
                     summary_pdf_url = excluded.summary_pdf_url",
                libsql::params_from_iter(vec![
                    libsql::Value::Text(id.clone()),
                    libsql::Value::Text(brand.name.clone()),
                    libsql::Value::Text(brand.sector.clone()),
                    libsql::Value::Text(brand.description.clone()),
                    opt_text(brand.logo_url.as_deref()),
                    opt_text(brand.website.as_deref()),
                    opt_real(brand.startup_cost_min),
                    opt_real(brand.startup_cost_max),
                    opt_real(brand.net_profit_margin),
                    opt_text(brand.summary_pdf_url.as_deref()),
                    libsql::Value::Text(timestamp(now())),
                ]),
            )
            .await?;
        self.get_franchise(&id).await
    }

    /// Insert or update one insight article.
    pub async fn upsert_insight(
        &self,
        insight: &NewInsightArticle,
    ) -> Result<InsightArticle, DatabaseError> {
        if insight.title.trim().is_empty() {
            return Err(DatabaseError::Validation("Insight title is required".into()));
        }
        let id = match &insight.id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => self.db().generate_id(PREFIX_INSIGHT).await?,
        };
        self.db()
            .execute(
                "INSERT INTO industry_insights (id, title, content, category, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     title = excluded.title,
                     content = excluded.content,
                     category = excluded.category",
                libsql::params![
                    id.as_str(),
                    insight.title.as_str(),
                    insight.content.as_str(),
                    insight.category.as_deref(),
                    timestamp(now())
                ],
            )
            .await?;
        self.get_insight(&id).await
    }
}
