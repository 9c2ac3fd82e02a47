//! Logging configuration and subscriber setup.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable that overrides the configured filter directive.
pub const LOG_ENV_VAR: &str = "DOCSIG_LOG";

fn default_filter() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `"warn"` or `"docsig_parser=debug"`.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// `DOCSIG_LOG` wins over `config.filter` when set and parseable.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] if the configured filter does not
/// parse, or [`ConfigError::Logging`] if a global subscriber is already set.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let filter = match tracing_subscriber::EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(&config.filter).map_err(|error| {
            ConfigError::InvalidValue {
                field: "log.filter".to_string(),
                reason: error.to_string(),
            }
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ConfigError::Logging(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(LogConfig::default().filter, "warn");
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let config = LogConfig {
            filter: "docsig=notalevel".to_string(),
        };
        // Only reachable when DOCSIG_LOG is unset in the test environment.
        if std::env::var(LOG_ENV_VAR).is_err() {
            let err = init_tracing(&config).expect_err("bad directive must fail");
            assert!(matches!(err, ConfigError::InvalidValue { .. }), "{err}");
        }
    }
}
