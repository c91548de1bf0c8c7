use fintel_core::entities::FranchiseBrand;
use fintel_core::enums::{Sector, SortKey};
use fintel_db::query::FranchiseQuery;
use fintel_db::service::FintelService;
use fintel_views::FranchisesView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BrowseArgs;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::output_rows;

pub async fn handle(args: &BrowseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args, flags.limit)?;
    run(query, ctx, flags).await
}

pub async fn run(query: FranchiseQuery, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let brands = fetch(query, &ctx.service).await?;
    output_rows(&brands, flags.format)
}

/// Sector accepts a label or slug and is stored by label.
pub fn build_query(args: &BrowseArgs, limit: Option<u32>) -> anyhow::Result<FranchiseQuery> {
    let mut query = FranchiseQuery::new().sort(SortKey::parse_or_default(&args.sort));
    if let Some(search) = &args.search {
        query = query.search(search.clone());
    }
    if let Some(raw) = args.sector.as_deref().filter(|s| !s.trim().is_empty()) {
        let sector: Sector = raw.parse()?;
        query = query.sector(sector.as_str());
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    Ok(query)
}

pub(crate) async fn fetch(
    query: FranchiseQuery,
    svc: &FintelService,
) -> anyhow::Result<Vec<FranchiseBrand>> {
    let mut view = FranchisesView::new(query);
    view.refresh(svc).await;
    Ok(settled(view.state())?.clone())
}
