//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging and signal handling
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Signal handlers are registered before the listener binds

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{self, ConfigError};
use crate::http::HttpServer;
use crate::lifecycle::signals;
use crate::observability::{logging, metrics::BuildError};

/// Errors that stop the service from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("metrics setup failed: {0}")]
    Metrics(#[from] BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the service and serve until the process is signalled.
pub async fn run() -> Result<(), StartupError> {
    let config = config::load()?;
    logging::init(&config);

    tracing::info!(
        host = %config.host,
        port = config.port,
        environment = %config.environment,
        debug_enabled = config.debug_enabled,
        app_name = %config.app_name,
        "Configuration loaded"
    );

    signals::exit_on_signal()?;

    let server = HttpServer::new(config)?;
    let listener = TcpListener::bind(server.config().bind_address()).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    server.run(listener).await?;
    Ok(())
}
