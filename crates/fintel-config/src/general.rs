//! General application configuration.

use serde::{Deserialize, Serialize};

/// Brands shown on the home route.
const fn default_featured_limit() -> u32 {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
        }
    }
}
