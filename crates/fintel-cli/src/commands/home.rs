use fintel_core::entities::FranchiseBrand;
use fintel_core::enums::Sector;
use fintel_db::query::FranchiseQuery;
use fintel_views::FeaturedView;
use serde::Serialize;

use crate::cli::root_commands::HomeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::browse;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured: Vec<FranchiseBrand>,
    pub sectors: Vec<&'static str>,
}

/// A non-blank `--search` goes straight to browse results.
pub async fn handle(args: &HomeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(term) = args.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let mut query = FranchiseQuery::new().search(term);
        if let Some(limit) = flags.limit {
            query = query.limit(limit);
        }
        return browse::run(query, ctx, flags).await;
    }
    show(ctx, flags).await
}

pub async fn show(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let home = load(ctx, flags.limit).await?;
    match flags.format {
        OutputFormat::Table => output_rows(&home.featured, flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(&home, flags.format),
    }
}

async fn load(ctx: &AppContext, limit: Option<u32>) -> anyhow::Result<HomeResponse> {
    let mut view = FeaturedView::new(limit.unwrap_or(ctx.config.general.featured_limit));
    view.refresh(&ctx.service).await;
    Ok(HomeResponse {
        featured: settled(view.state())?.clone(),
        sectors: Sector::ALL.iter().map(|s| s.as_str()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{context, seed_catalog};

    #[tokio::test]
    async fn featured_is_name_ordered_and_limited() {
        let ctx = context(None).await;
        seed_catalog(&ctx).await;

        let home = load(&ctx, Some(2)).await.unwrap();
        let names = home.featured.iter().map(|b| b.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Kumon", "Snap Fitness"]);
        assert_eq!(home.sectors.len(), 8);
    }

    #[tokio::test]
    async fn featured_limit_comes_from_config() {
        let mut ctx = context(None).await;
        seed_catalog(&ctx).await;
        ctx.config.general.featured_limit = 1;

        let home = load(&ctx, None).await.unwrap();
        assert_eq!(home.featured.len(), 1);
    }
}
