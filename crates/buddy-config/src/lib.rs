//! # buddy-config
//!
//! Layered configuration loading for ccbuddy using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CCBUDDY_*` prefix, `__` as separator)
//! 2. Working-directory `.ccbuddy/config.toml`
//! 3. User-level `~/.config/ccbuddy/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CCBUDDY_STORE__DIR` -> `store.dir`.
//!
//! # Usage
//!
//! ```no_run
//! use buddy_config::BuddyConfig;
//!
//! let config = BuddyConfig::load().expect("config");
//! let store = buddy_store::Store::new(config.store.resolve_dir());
//! ```

mod error;
mod store;

pub use error::ConfigError;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "CCBUDDY_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BuddyConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

impl BuddyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "merging user config");
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Working-directory config
        let local_path = PathBuf::from(".ccbuddy/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging local config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ccbuddy").join("config.toml"))
    }
}
