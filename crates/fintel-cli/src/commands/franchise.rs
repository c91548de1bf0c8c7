use fintel_core::entities::FranchiseBrand;
use fintel_core::format::{brand_overview, format_cost_range, format_percentage};
use fintel_views::FranchiseDetailView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::output;

/// A brand plus the figures as they are displayed.
#[derive(Debug, Serialize)]
pub struct FranchiseDetail {
    #[serde(flatten)]
    pub brand: FranchiseBrand,
    pub startup_cost: String,
    pub profit_margin: String,
    pub overview: String,
}

impl From<FranchiseBrand> for FranchiseDetail {
    fn from(brand: FranchiseBrand) -> Self {
        Self {
            startup_cost: format_cost_range(brand.startup_cost_min, brand.startup_cost_max),
            profit_margin: format_percentage(brand.net_profit_margin),
            overview: brand_overview(&brand),
            brand,
        }
    }
}

pub async fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&load(id, ctx).await?, flags.format)
}

async fn load(id: &str, ctx: &AppContext) -> anyhow::Result<FranchiseDetail> {
    let mut view = FranchiseDetailView::new(id);
    view.refresh(&ctx.service).await;
    let brand = settled(view.state())?
        .clone()
        .ok_or_else(|| anyhow::anyhow!("Franchise not found: {id}"))?;
    Ok(brand.into())
}
