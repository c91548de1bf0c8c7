use fintel_views::InsightsView;

use crate::cli::GlobalFlags;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::output_rows;

/// Newest articles first; `--limit` truncates.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = InsightsView::new();
    view.refresh(&ctx.service).await;
    let mut articles = settled(view.state())?.clone();
    if let Some(limit) = flags.limit {
        articles.truncate(usize::try_from(limit)?);
    }
    output_rows(&articles, flags.format)
}
