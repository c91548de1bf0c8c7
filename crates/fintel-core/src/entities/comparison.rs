use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FranchiseBrand;

/// A user-owned pairing of two brands with free-text notes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Comparison {
    pub id: String,
    pub user_id: String,
    pub franchise_a_id: String,
    pub franchise_b_id: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ComparisonWithBrands {
    #[serde(flatten)]
    pub comparison: Comparison,
    pub franchise_a: FranchiseBrand,
    pub franchise_b: FranchiseBrand,
}
