//! # docsig-config
//!
//! Layered configuration loading for docsig using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DOCSIG_*` prefix, `__` as separator)
//! 2. Project-level `.docsig/config.toml`
//! 3. User-level `~/.config/docsig/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DOCSIG_SCOPE__DEFAULT_SCOPE` -> `scope.default_scope`,
//! `DOCSIG_LOG__FILTER` -> `log.filter`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use docsig_config::{DocsigConfig, init_tracing};
//!
//! let config = DocsigConfig::load_with_dotenv().expect("config");
//! init_tracing(&config.log).expect("tracing");
//!
//! if let Some(scope) = config.scope.default_keyword() {
//!     println!("default scope: {scope}");
//! }
//! ```

mod error;
mod log;
mod scope;

pub use error::ConfigError;
pub use log::{LOG_ENV_VAR, LogConfig, init_tracing};
pub use scope::ScopeConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocsigConfig {
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DocsigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Same as [`Self::load`].
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

        let local_path = PathBuf::from(".docsig/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // `DOCSIG_LOG` is the tracing filter override, not a config key.
        figment.merge(Env::prefixed("DOCSIG_").ignore(&["LOG"]).split("__"))
    }

    /// Reject values that deserialize fine but cannot be used.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "log.filter".to_string(),
                reason: "filter directive must not be empty".to_string(),
            });
        }
        if let Some(scope) = &self.scope.default_scope
            && scope.trim().chars().any(char::is_whitespace)
        {
            return Err(ConfigError::InvalidValue {
                field: "scope.default_scope".to_string(),
                reason: format!("'{scope}' must be a single scope keyword"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("docsig").join("config.toml"))
    }
}
