use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FranchiseBrand;

/// A user-owned named group of brands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Collection {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Membership of one brand in one collection. Unique per pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CollectionItem {
    pub id: String,
    pub collection_id: String,
    pub brand_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CollectionItemWithBrand {
    pub id: String,
    pub brand: FranchiseBrand,
}

/// A collection with its items in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CollectionWithItems {
    #[serde(flatten)]
    pub collection: Collection,
    pub items: Vec<CollectionItemWithBrand>,
}

impl CollectionWithItems {
    /// Brand ids in insertion order.
    #[must_use]
    pub fn brand_ids(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.brand.id.as_str()).collect()
    }
}
