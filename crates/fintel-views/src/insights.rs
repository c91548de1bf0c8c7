use fintel_core::entities::InsightArticle;
use fintel_db::service::FintelService;

use crate::state::QueryState;

/// Insight articles, newest first.
#[derive(Default)]
pub struct InsightsView {
    state: QueryState<Vec<InsightArticle>>,
}

impl InsightsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Vec<InsightArticle>> {
        &self.state
    }

    pub async fn refresh(&mut self, svc: &FintelService) -> &QueryState<Vec<InsightArticle>> {
        self.state.begin();
        let result = svc.list_insights().await;
        self.state.settle(result);
        &self.state
    }
}
