use fintel_views::ComparisonsView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompareCommands;
use crate::commands::shared::view::settled;
use crate::context::AppContext;
use crate::output::{output, output_rows};

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    id: &'a str,
    deleted: bool,
}

/// Handle `fintel compare`. Signed out, the list is empty.
pub async fn handle(
    action: &CompareCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    let mut view = ComparisonsView::new();
    view.sync_user(svc).await;

    match action {
        CompareCommands::List => output_rows(settled(view.state())?, flags.format),
        CompareCommands::Create(args) => {
            let created = view
                .create(svc, &args.franchise_a_id, &args.franchise_b_id, &args.notes)
                .await?;
            output(&created, flags.format)
        }
        CompareCommands::Delete(args) => {
            view.delete(svc, &args.id).await?;
            output(
                &Deleted {
                    id: &args.id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::subcommands::{CompareCreateArgs, CompareIdArgs};
    use crate::test_support::{context, flags, seed_catalog};

    fn create(a: &str, b: &str) -> CompareCommands {
        CompareCommands::Create(CompareCreateArgs {
            franchise_a_id: a.into(),
            franchise_b_id: b.into(),
            notes: "gym vs sandwiches".into(),
        })
    }

    #[tokio::test]
    async fn same_brand_twice_is_rejected() {
        let ctx = context(Some("user-1")).await;
        seed_catalog(&ctx).await;
        let error = handle(&create("brd-snap", "brd-snap"), &ctx, &flags())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Choose two different franchises to compare");
    }

    #[tokio::test]
    async fn create_and_delete_round_trip() {
        let ctx = context(Some("user-1")).await;
        seed_catalog(&ctx).await;

        handle(&create("brd-snap", "brd-subway"), &ctx, &flags())
            .await
            .unwrap();
        let saved = ctx.service.list_comparisons().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].franchise_b.name, "Subway");

        let id = saved[0].comparison.id.clone();
        handle(&CompareCommands::Delete(CompareIdArgs { id }), &ctx, &flags())
            .await
            .unwrap();
        assert!(ctx.service.list_comparisons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn other_users_comparison_cannot_be_deleted() {
        let owner = context(Some("user-1")).await;
        seed_catalog(&owner).await;
        let created = owner
            .service
            .create_comparison("brd-snap", "brd-subway", "")
            .await
            .unwrap();

        let mut intruder = owner;
        intruder
            .service
            .set_identity(Some(fintel_core::identity::AuthIdentity::new("user-2")));
        let result = handle(
            &CompareCommands::Delete(CompareIdArgs {
                id: created.id.clone(),
            }),
            &intruder,
            &flags(),
        )
        .await;
        assert!(result.is_err());

        intruder
            .service
            .set_identity(Some(fintel_core::identity::AuthIdentity::new("user-1")));
        assert_eq!(intruder.service.list_comparisons().await.unwrap().len(), 1);
    }
}
