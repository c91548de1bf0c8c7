//! The signed-in user's collections and their mutators.
//!
//! Every mutator performs one write and then re-fetches the whole list.
//! There is no optimistic patching.

use fintel_core::entities::{Collection, CollectionItem, CollectionWithItems};
use fintel_db::error::DatabaseError;
use fintel_db::service::FintelService;

use crate::state::QueryState;

#[derive(Default)]
pub struct CollectionsView {
    user_id: Option<String>,
    state: QueryState<Vec<CollectionWithItems>>,
}

impl CollectionsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &QueryState<Vec<CollectionWithItems>> {
        &self.state
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Track the service's current user, re-fetching when it changed.
    /// Returns whether a fetch ran.
    pub async fn sync_user(&mut self, svc: &FintelService) -> bool {
        let current = svc.identity().map(|i| i.user_id.clone());
        if current == self.user_id && !self.state.loading {
            return false;
        }
        self.user_id = current;
        self.refresh(svc).await;
        true
    }

    /// Re-fetch. Without a user the list is empty and nothing is queried.
    pub async fn refresh(
        &mut self,
        svc: &FintelService,
    ) -> &QueryState<Vec<CollectionWithItems>> {
        if self.user_id.is_none() {
            self.state = QueryState {
                data: Vec::new(),
                loading: false,
                error: None,
            };
            return &self.state;
        }
        self.state.begin();
        let result = svc.list_collections().await;
        self.state.settle(result);
        &self.state
    }

    pub async fn create(
        &mut self,
        svc: &FintelService,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection, DatabaseError> {
        self.require_user()?;
        let created = svc.create_collection(name, description).await?;
        self.refresh(svc).await;
        Ok(created)
    }

    pub async fn update(
        &mut self,
        svc: &FintelService,
        id: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<Collection, DatabaseError> {
        self.require_user()?;
        let updated = svc.update_collection(id, name, description).await?;
        self.refresh(svc).await;
        Ok(updated)
    }

    pub async fn delete(&mut self, svc: &FintelService, id: &str) -> Result<(), DatabaseError> {
        self.require_user()?;
        svc.delete_collection(id).await?;
        self.refresh(svc).await;
        Ok(())
    }

    pub async fn add_item(
        &mut self,
        svc: &FintelService,
        collection_id: &str,
        brand_id: &str,
    ) -> Result<CollectionItem, DatabaseError> {
        self.require_user()?;
        let item = svc.add_to_collection(collection_id, brand_id).await?;
        self.refresh(svc).await;
        Ok(item)
    }

    pub async fn remove_item(
        &mut self,
        svc: &FintelService,
        collection_id: &str,
        brand_id: &str,
    ) -> Result<(), DatabaseError> {
        self.require_user()?;
        svc.remove_from_collection(collection_id, brand_id).await?;
        self.refresh(svc).await;
        Ok(())
    }

    fn require_user(&self) -> Result<(), DatabaseError> {
        if self.user_id.is_none() {
            return Err(DatabaseError::NotAuthenticated);
        }
        Ok(())
    }
}
