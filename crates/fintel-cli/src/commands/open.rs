use fintel_core::routes::Route;
use fintel_db::query::FranchiseQuery;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::commands::shared::gate::show_sign_in_required;
use crate::commands::{browse, collection, franchise, home};
use crate::context::AppContext;
use crate::output::output;

/// Pages that are forms in a browser map to commands here.
#[derive(Debug, Serialize)]
struct UseCommand {
    route: String,
    command: &'static str,
}

/// Handle `fintel open <path>`: render the page a path points to.
pub async fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.path)?;
    tracing::debug!(%route, "opening route");

    if route.requires_auth() && !ctx.is_authenticated() {
        return show_sign_in_required(&route, flags);
    }

    match route {
        Route::Home => home::show(ctx, flags).await,
        Route::Browse { search } => {
            browse::run(browse_query(search, flags.limit), ctx, flags).await
        }
        Route::FranchiseDetail { id } => franchise::handle(&id, ctx, flags).await,
        Route::Collections => collection::list(ctx, flags).await,
        Route::Login => output(
            &UseCommand {
                route: route.to_path(),
                command: "fintel auth login --email <email>",
            },
            flags.format,
        ),
        Route::Register => output(
            &UseCommand {
                route: route.to_path(),
                command: "fintel auth register --email <email>",
            },
            flags.format,
        ),
    }
}

fn browse_query(search: Option<String>, limit: Option<u32>) -> FranchiseQuery {
    let mut query = FranchiseQuery::new();
    if let Some(term) = search {
        query = query.search(term);
    }
    if let Some(limit) = limit {
        query = query.limit(limit);
    }
    query
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{context, flags, seed_catalog};

    fn open(path: &str) -> OpenArgs {
        OpenArgs { path: path.into() }
    }

    #[tokio::test]
    async fn unknown_path_is_an_error() {
        let ctx = context(None).await;
        let error = handle(&open("/admin"), &ctx, &flags()).await.unwrap_err();
        assert_eq!(error.to_string(), "Unknown route: /admin");
    }

    #[tokio::test]
    async fn public_routes_render() {
        let ctx = context(None).await;
        seed_catalog(&ctx).await;
        for path in ["/", "/browse?search=gym", "/franchise/brd-snap", "/login", "/collections"] {
            handle(&open(path), &ctx, &flags()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn browse_route_searches_with_decoded_term() {
        let ctx = context(None).await;
        seed_catalog(&ctx).await;

        let Route::Browse { search } = Route::parse("/browse?search=neighborhood%20GYMS").unwrap()
        else {
            panic!("expected the browse route");
        };
        let query = browse_query(search, Some(5));
        assert_eq!(query.search_term(), Some("neighborhood GYMS"));
        assert_eq!(query.limit, Some(5));

        let brands = browse::fetch(query, &ctx.service).await.unwrap();
        let ids: Vec<&str> = brands.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["brd-snap"]);
    }

    #[test]
    fn browse_route_without_search_lists_everything() {
        let query = browse_query(None, None);
        assert_eq!(query.search_term(), None);
        assert_eq!(query.limit, None);
    }

    #[tokio::test]
    async fn franchise_route_surfaces_not_found() {
        let ctx = context(None).await;
        let error = handle(&open("/franchise/brd-gone"), &ctx, &flags())
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "Franchise not found: brd-gone");
    }
}
