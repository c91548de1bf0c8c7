//! Hosted auth service configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const PLACEHOLDER_URL: &str = "https://<PROJECT-ID>.supabase.co";
const PLACEHOLDER_KEY: &str = "<ANON_KEY>";

fn default_client_info() -> String {
    "franchise-intel-ai".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Service endpoint, e.g. `https://abc123.supabase.co`.
    #[serde(default)]
    pub url: String,

    /// Public (anon) API key sent as the `apikey` header.
    #[serde(default)]
    pub anon_key: String,

    /// Value of the `X-Client-Info` header.
    #[serde(default = "default_client_info")]
    pub client_info: String,

    /// Keep the session across process runs.
    #[serde(default = "default_true")]
    pub persist_session: bool,

    /// Refresh an expiring access token during session recovery.
    #[serde(default = "default_true")]
    pub auto_refresh_token: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            client_info: default_client_info(),
            persist_session: true,
            auto_refresh_token: true,
        }
    }
}

impl AuthConfig {
    /// Check if the endpoint and key are both set.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Reject the template placeholders shipped in example configs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the placeholder field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url == PLACEHOLDER_URL || self.url.contains("<PROJECT-ID>") {
            return Err(ConfigError::InvalidValue {
                field: "auth.url".into(),
                reason: "placeholder project id".into(),
            });
        }
        if self.anon_key == PLACEHOLDER_KEY {
            return Err(ConfigError::InvalidValue {
                field: "auth.anon_key".into(),
                reason: "placeholder key".into(),
            });
        }
        Ok(())
    }

    /// Service URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}
