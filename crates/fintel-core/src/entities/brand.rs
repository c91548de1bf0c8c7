use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A franchise opportunity in the catalog. Owned by the backend; clients
/// only read it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FranchiseBrand {
    pub id: String,
    pub name: String,
    /// Sector label (see [`crate::enums::Sector`]). Kept as text so rows with
    /// sectors added server-side still load.
    pub sector: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    /// USD.
    pub startup_cost_min: Option<f64>,
    /// USD.
    pub startup_cost_max: Option<f64>,
    /// Percent, e.g. `18.5`.
    pub net_profit_margin: Option<f64>,
    pub summary_pdf_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Catalog row as it appears in a seed file. `id` is optional; a missing id
/// is generated on import.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewFranchiseBrand {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub sector: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub startup_cost_min: Option<f64>,
    #[serde(default)]
    pub startup_cost_max: Option<f64>,
    #[serde(default)]
    pub net_profit_margin: Option<f64>,
    #[serde(default)]
    pub summary_pdf_url: Option<String>,
}
