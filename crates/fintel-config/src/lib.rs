//! # fintel-config
//!
//! Layered configuration loading for Franchise Intel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FINTEL_*` prefix, `__` as separator)
//! 2. Project-level `.fintel/config.toml`
//! 3. User-level `~/.config/fintel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FINTEL_AUTH__URL` -> `auth.url`, `FINTEL_DATABASE__LOCAL_PATH`
//! -> `database.local_path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fintel_config::FintelConfig;
//!
//! let config = FintelConfig::load_with_dotenv().expect("config");
//! if config.auth.is_configured() {
//!     println!("Auth endpoint: {}", config.auth.url);
//! }
//! ```

mod assistant;
mod auth;
mod database;
mod error;
mod general;

pub use assistant::AssistantConfig;
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "FINTEL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FintelConfig {
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FintelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is a
    /// template placeholder.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.auth.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".fintel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fintel").join("config.toml"))
    }

    /// Require a usable auth endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when `auth.url` or `auth.anon_key`
    /// is missing.
    pub fn require_auth(&self) -> Result<&AuthConfig, ConfigError> {
        if self.auth.is_configured() {
            Ok(&self.auth)
        } else {
            Err(ConfigError::NotConfigured {
                section: "auth".into(),
            })
        }
    }
}
