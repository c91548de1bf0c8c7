//! Catalog views: filtered listing, single brand, featured strip.

use fintel_core::entities::FranchiseBrand;
use fintel_db::query::FranchiseQuery;
use fintel_db::service::FintelService;

use crate::state::QueryState;

/// Filtered, sorted catalog listing.
pub struct FranchisesView {
    query: FranchiseQuery,
    state: QueryState<Vec<FranchiseBrand>>,
}

impl FranchisesView {
    #[must_use]
    pub fn new(query: FranchiseQuery) -> Self {
        Self {
            query,
            state: QueryState::default(),
        }
    }

    #[must_use]
    pub const fn query(&self) -> &FranchiseQuery {
        &self.query
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Vec<FranchiseBrand>> {
        &self.state
    }

    /// Run the current query.
    pub async fn refresh(&mut self, svc: &FintelService) -> &QueryState<Vec<FranchiseBrand>> {
        self.state.begin();
        let result = svc.list_franchises(&self.query).await;
        self.state.settle(result);
        &self.state
    }

    /// Replace the query, fetching only if it differs from the current one.
    /// Returns whether a fetch ran.
    pub async fn set_query(&mut self, svc: &FintelService, query: FranchiseQuery) -> bool {
        if query == self.query {
            return false;
        }
        self.query = query;
        self.refresh(svc).await;
        true
    }
}

/// One brand by id.
pub struct FranchiseDetailView {
    id: String,
    state: QueryState<Option<FranchiseBrand>>,
}

impl FranchiseDetailView {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: QueryState::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Option<FranchiseBrand>> {
        &self.state
    }

    pub async fn refresh(
        &mut self,
        svc: &FintelService,
    ) -> &QueryState<Option<FranchiseBrand>> {
        self.state.begin();
        let result = svc.get_franchise(&self.id).await.map(Some);
        self.state.settle(result);
        &self.state
    }
}

/// The first few brands of the name-sorted catalog, shown on the home route.
pub struct FeaturedView {
    limit: u32,
    state: QueryState<Vec<FranchiseBrand>>,
}

impl FeaturedView {
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            state: QueryState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Vec<FranchiseBrand>> {
        &self.state
    }

    pub async fn refresh(&mut self, svc: &FintelService) -> &QueryState<Vec<FranchiseBrand>> {
        self.state.begin();
        let result = svc.featured_franchises(self.limit).await;
        self.state.settle(result);
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use fintel_core::enums::SortKey;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{seed_brand, service};

    #[tokio::test]
    async fn set_query_fetches_only_on_change() {
        let svc = service(None).await;
        seed_brand(&svc, "Subway", "Food & Beverage", Some(12.0)).await;
        seed_brand(&svc, "Snap Fitness", "Fitness & Health", Some(18.0)).await;

        let mut view = FranchisesView::new(FranchiseQuery::new());
        assert!(view.state().loading);
        view.refresh(&svc).await;
        assert_eq!(view.state().data.len(), 2);

        assert!(!view.set_query(&svc, FranchiseQuery::new()).await);

        let by_profit = FranchiseQuery::new().sort(SortKey::Profit);
        assert!(view.set_query(&svc, by_profit).await);
        let names: Vec<&str> = view.state().data.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Snap Fitness", "Subway"]);
        assert!(!view.state().loading);
    }

    #[tokio::test]
    async fn search_ignores_case_beyond_ascii() {
        let svc = service(None).await;
        seed_brand(&svc, "Café Crème", "Food & Beverage", None).await;
        seed_brand(&svc, "Subway", "Food & Beverage", None).await;

        let mut view = FranchisesView::new(FranchiseQuery::new().search("CAFÉ"));
        let names: Vec<&str> = view
            .refresh(&svc)
            .await
            .data
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(names, vec!["Café Crème"]);
    }

    #[tokio::test]
    async fn backend_failure_surfaces_raw_message_and_keeps_data() {
        let svc = service(None).await;
        seed_brand(&svc, "Subway", "Food & Beverage", None).await;
        let mut view = FranchisesView::new(FranchiseQuery::new());
        view.refresh(&svc).await;
        assert_eq!(view.state().data.len(), 1);

        svc.db()
            .execute("DROP TABLE franchise_brands", ())
            .await
            .unwrap();
        let Err(backend) = svc.db().conn().query("SELECT id FROM franchise_brands", ()).await
        else {
            panic!("query against a dropped table should fail");
        };
        let expected = backend.to_string();

        let state = view.refresh(&svc).await;
        assert_eq!(state.error.as_deref(), Some(expected.as_str()));
        assert!(expected.contains("no such table: franchise_brands"));
        assert_eq!(state.data.len(), 1);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn unknown_detail_surfaces_not_found() {
        let svc = service(None).await;
        let mut view = FranchiseDetailView::new("brd-missing");
        let state = view.refresh(&svc).await;
        assert_eq!(state.data, None);
        assert_eq!(
            state.error.as_deref(),
            Some("Franchise not found: brd-missing")
        );
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn featured_respects_limit() {
        let svc = service(None).await;
        for name in ["C", "A", "B"] {
            seed_brand(&svc, name, "Retail", None).await;
        }
        let mut view = FeaturedView::new(2);
        let names: Vec<String> = view
            .refresh(&svc)
            .await
            .data
            .iter()
            .map(|b| b.name.clone())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
