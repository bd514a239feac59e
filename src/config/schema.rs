//! Configuration schema definitions.
//!
//! The service is configured entirely from environment variables. Every
//! field has a default so an empty environment yields a runnable service.

use serde::{Deserialize, Serialize};

/// Default bind host (`APP_HOST`).
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port (`APP_PORT`).
pub const DEFAULT_PORT: u16 = 3000;

/// Default environment label (`ENVIRONMENT`).
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Default application name (`APP_NAME`).
pub const DEFAULT_APP_NAME: &str = "secure-flask-app";

/// Root configuration for the service.
///
/// Loaded once at startup and never mutated afterwards; shared via `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Listen port, 1..=65535.
    pub port: u16,

    /// Deployment label reported by `/` and `/health` (e.g., "staging").
    pub environment: String,

    /// Raises the default log level to debug.
    pub debug_enabled: bool,

    /// Application name reported by `/health`.
    pub app_name: String,
}

impl AppConfig {
    /// Socket address string for binding the listener.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            debug_enabled: false,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}
