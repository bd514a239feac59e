//! Configuration loading from the environment.

use thiserror::Error;

use crate::config::schema::{
    AppConfig, DEFAULT_APP_NAME, DEFAULT_ENVIRONMENT, DEFAULT_HOST, DEFAULT_PORT,
};
use crate::config::validation::validate_port;

pub const ENV_HOST: &str = "APP_HOST";
pub const ENV_PORT: &str = "APP_PORT";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_DEBUG: &str = "DEBUG";
pub const ENV_APP_NAME: &str = "APP_NAME";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `APP_PORT` is not an integer.
    #[error("invalid APP_PORT value {0:?}: expected an integer")]
    InvalidPort(String),

    /// `APP_PORT` is an integer outside 1..=65535.
    #[error("APP_PORT {0} out of range: expected 1-65535")]
    PortOutOfRange(i64),
}

/// Load configuration from the process environment.
pub fn load() -> Result<AppConfig, ConfigError> {
    load_from(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to resolve each variable.
///
/// Missing variables fall back to defaults. Deterministic for a given lookup.
pub fn load_from<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup(ENV_PORT) {
        Some(raw) => {
            let parsed: i64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
            validate_port(parsed)?
        }
        None => DEFAULT_PORT,
    };

    let debug_enabled = lookup(ENV_DEBUG)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    Ok(AppConfig {
        host: lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port,
        environment: lookup(ENV_ENVIRONMENT).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        debug_enabled,
        app_name: lookup(ENV_APP_NAME).unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
    })
}
