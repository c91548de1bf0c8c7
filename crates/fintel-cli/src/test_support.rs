use fintel_config::FintelConfig;
use fintel_core::identity::AuthIdentity;
use fintel_db::repos::catalog::CatalogSeed;
use fintel_db::service::FintelService;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::context::AppContext;

/// In-memory context, signed in as `user` when given. No auth endpoint.
pub async fn context(user: Option<&str>) -> AppContext {
    let mut config = FintelConfig::default();
    config.assistant.reply_delay_ms = 0;
    AppContext {
        config,
        service: FintelService::new_local(":memory:", user.map(AuthIdentity::new))
            .await
            .unwrap(),
        session: None,
    }
}

/// Three brands and one insight with fixed ids.
pub async fn seed_catalog(ctx: &AppContext) {
    let seed = CatalogSeed::from_json(
        r#"{
            "brands": [
                { "id": "brd-subway", "name": "Subway", "sector": "Food & Beverage",
                  "description": "Sandwiches made to order",
                  "startup_cost_min": 116000, "startup_cost_max": 263000, "net_profit_margin": 12 },
                { "id": "brd-snap", "name": "Snap Fitness", "sector": "Fitness & Health",
                  "description": "24/7 neighborhood gyms",
                  "startup_cost_min": 80000, "startup_cost_max": 200000, "net_profit_margin": 30 },
                { "id": "brd-kumon", "name": "Kumon", "sector": "Education",
                  "description": "After-school math and reading" }
            ],
            "insights": [
                { "id": "ins-1", "title": "Fitness franchising in 2024", "content": "Growth continues.",
                  "category": "Trends" }
            ]
        }"#,
    )
    .unwrap();
    ctx.service.import_catalog(&seed).await.unwrap();
}

pub fn flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Json,
        limit: None,
        quiet: true,
        verbose: false,
        color: ColorMode::Never,
    }
}
