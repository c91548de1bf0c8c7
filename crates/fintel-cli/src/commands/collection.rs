use fintel_core::routes::Route;
use fintel_views::CollectionsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CollectionCommands;
use crate::commands::shared::gate::show_sign_in_required;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    id: &'a str,
    deleted: bool,
}

#[derive(Debug, Serialize)]
struct ItemRemoved<'a> {
    collection_id: &'a str,
    brand_id: &'a str,
    removed: bool,
}

/// Handle `fintel collection`.
pub async fn handle(
    action: &CollectionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        CollectionCommands::List => list(ctx, flags).await,
        CollectionCommands::Create(args) => {
            let created = synced_view(ctx)
                .await
                .create(svc, &args.name, args.description.as_deref())
                .await?;
            output(&created, flags.format)
        }
        CollectionCommands::Update(args) => {
            let updated = synced_view(ctx)
                .await
                .update(svc, &args.id, &args.name, args.description.as_deref())
                .await?;
            output(&updated, flags.format)
        }
        CollectionCommands::Delete(args) => {
            synced_view(ctx).await.delete(svc, &args.id).await?;
            output(
                &Deleted {
                    id: &args.id,
                    deleted: true,
                },
                flags.format,
            )
        }
        CollectionCommands::Add(args) => {
            let item = synced_view(ctx)
                .await
                .add_item(svc, &args.collection_id, &args.brand_id)
                .await?;
            output(&item, flags.format)
        }
        CollectionCommands::Remove(args) => {
            synced_view(ctx)
                .await
                .remove_item(svc, &args.collection_id, &args.brand_id)
                .await?;
            output(
                &ItemRemoved {
                    collection_id: &args.collection_id,
                    brand_id: &args.brand_id,
                    removed: true,
                },
                flags.format,
            )
        }
    }
}

/// The collections page. Signed-out users get the sign-in prompt instead.
pub async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !ctx.is_authenticated() {
        return show_sign_in_required(&Route::Collections, flags);
    }
    let view = synced_view(ctx).await;
    output_rows(settled(view.state())?, flags.format)
}

/// A view bound to the current user, already fetched once.
async fn synced_view(ctx: &AppContext) -> CollectionsView {
    let mut view = CollectionsView::new();
    view.sync_user(&ctx.service).await;
    view
}
