//! The signed-in user's saved comparisons.

use fintel_core::entities::{Comparison, ComparisonWithBrands};
use fintel_db::error::DatabaseError;
use fintel_db::service::FintelService;

use crate::state::QueryState;

#[derive(Default)]
pub struct ComparisonsView {
    user_id: Option<String>,
    state: QueryState<Vec<ComparisonWithBrands>>,
}

impl ComparisonsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Vec<ComparisonWithBrands>> {
        &self.state
    }

    pub async fn sync_user(&mut self, svc: &FintelService) -> bool {
        let current = svc.identity().map(|i| i.user_id.clone());
        if current == self.user_id && !self.state.loading {
            return false;
        }
        self.user_id = current;
        self.refresh(svc).await;
        true
    }

    pub async fn refresh(
        &mut self,
        svc: &FintelService,
    ) -> &QueryState<Vec<ComparisonWithBrands>> {
        if self.user_id.is_none() {
            self.state = QueryState {
                data: Vec::new(),
                loading: false,
                error: None,
            };
            return &self.state;
        }
        self.state.begin();
        let result = svc.list_comparisons().await;
        self.state.settle(result);
        &self.state
    }

    pub async fn create(
        &mut self,
        svc: &FintelService,
        franchise_a_id: &str,
        franchise_b_id: &str,
        notes: &str,
    ) -> Result<Comparison, DatabaseError> {
        if self.user_id.is_none() {
            return Err(DatabaseError::NotAuthenticated);
        }
        let created = svc
            .create_comparison(franchise_a_id, franchise_b_id, notes)
            .await?;
        self.refresh(svc).await;
        Ok(created)
    }

    pub async fn delete(&mut self, svc: &FintelService, id: &str) -> Result<(), DatabaseError> {
        if self.user_id.is_none() {
            return Err(DatabaseError::NotAuthenticated);
        }
        svc.delete_comparison(id).await?;
        self.refresh(svc).await;
        Ok(())
    }
}
