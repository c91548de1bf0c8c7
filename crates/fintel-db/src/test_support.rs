//! Shared test utilities for fintel-db unit tests.

pub(crate) mod helpers {
    use fintel_core::entities::NewFranchiseBrand;
    use fintel_core::identity::AuthIdentity;

    use crate::FintelDb;
    use crate::service::FintelService;

    /// In-memory service with no identity (public reads only).
    pub async fn test_service() -> FintelService {
        let db = FintelDb::open_local(":memory:").await.unwrap();
        FintelService::from_db(db, None)
    }

    /// In-memory service signed in as `user_id`.
    pub async fn test_service_as(user_id: &str) -> FintelService {
        let db = FintelDb::open_local(":memory:").await.unwrap();
        FintelService::from_db(db, Some(AuthIdentity::new(user_id)))
    }

    /// Builder for catalog rows in tests.
    pub struct BrandSeed(NewFranchiseBrand);

    impl BrandSeed {
        pub fn new(name: &str) -> Self {
            Self(NewFranchiseBrand {
                id: None,
                name: name.into(),
                sector: "Services".into(),
                description: String::new(),
                logo_url: None,
                website: None,
                startup_cost_min: None,
                startup_cost_max: None,
                net_profit_margin: None,
                summary_pdf_url: None,
            })
        }

        pub fn sector(mut self, sector: &str) -> Self {
            self.0.sector = sector.into();
            self
        }

        pub fn description(mut self, description: &str) -> Self {
            self.0.description = description.into();
            self
        }

        pub fn cost(mut self, min: Option<f64>, max: Option<f64>) -> Self {
            self.0.startup_cost_min = min;
            self.0.startup_cost_max = max;
            self
        }

        pub fn margin(mut self, margin: Option<f64>) -> Self {
            self.0.net_profit_margin = margin;
            self
        }
    }

    /// Insert a brand and return its id.
    pub async fn seed_brand(svc: &FintelService, seed: BrandSeed) -> String {
        svc.upsert_brand(&seed.0).await.unwrap().id
    }

    /// Rebuild the schema the way older deployments had it: collections
    /// live in `user_collections`.
    pub async fn use_legacy_collections_table(svc: &FintelService) {
        svc.db()
            .conn()
            .execute_batch(
                "DROP TABLE collection_items;
                 DROP TABLE collections;
                 CREATE TABLE user_collections (
                     id TEXT PRIMARY KEY,
                     user_id TEXT NOT NULL,
                     name TEXT NOT NULL,
                     description TEXT,
                     created_at TEXT NOT NULL DEFAULT (datetime('now'))
                 );
                 CREATE TABLE collection_items (
                     id TEXT PRIMARY KEY,
                     collection_id TEXT NOT NULL REFERENCES user_collections(id) ON DELETE CASCADE,
                     brand_id TEXT NOT NULL REFERENCES franchise_brands(id) ON DELETE CASCADE,
                     created_at TEXT NOT NULL DEFAULT (datetime('now')),
                     UNIQUE (collection_id, brand_id)
                 );",
            )
            .await
            .unwrap();
    }
}
