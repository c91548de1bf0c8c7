use anyhow::Context;
use fintel_db::repos::catalog::CatalogSeed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    file: String,
    brands: usize,
    insights: usize,
}

pub async fn handle(
    action: &CatalogCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Import(args) => {
            let body = tokio::fs::read_to_string(&args.file)
                .await
                .with_context(|| format!("failed to read {}", args.file.display()))?;
            let seed = CatalogSeed::from_json(&body)?;
            let summary = ctx.service.import_catalog(&seed).await?;
            output(
                &ImportResponse {
                    file: args.file.display().to_string(),
                    brands: summary.brands,
                    insights: summary.insights,
                },
                flags.format,
            )
        }
    }
}
