//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Pick the default level from the loaded configuration
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over the configured default
//! - `DEBUG=true` lowers the default filter to debug

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Default filter directives for the given configuration.
pub fn default_filter(config: &AppConfig) -> &'static str {
    if config.debug_enabled {
        "docker_status_service=debug,tower_http=debug"
    } else {
        "docker_status_service=info,tower_http=info"
    }
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(config).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_debug_flag() {
        let mut config = AppConfig::default();
        assert!(default_filter(&config).contains("=info"));

        config.debug_enabled = true;
        assert!(default_filter(&config).contains("=debug"));
    }
}
