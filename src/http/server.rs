//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (metrics interceptor, tracing, request ID)
//! - Bind server to listener

use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::middleware::{track_metrics, METRICS_PATH};
use crate::observability::metrics::{BuildError, MetricsRegistry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: Arc<MetricsRegistry>,
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server with a fresh metrics registry.
    pub fn new(config: AppConfig) -> Result<Self, BuildError> {
        let metrics = Arc::new(MetricsRegistry::new()?);
        Ok(Self::with_metrics(config, metrics))
    }

    /// Create a new HTTP server recording into `metrics`.
    pub fn with_metrics(config: AppConfig, metrics: Arc<MetricsRegistry>) -> Self {
        let state = AppState {
            config: Arc::new(config),
            metrics,
        };
        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The metrics layer wraps the fallback too, so unmatched paths are
    /// counted like any other request.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/health", get(handlers::health))
            .route("/error", get(handlers::error))
            .route(METRICS_PATH, get(handlers::metrics))
            .fallback(handlers::not_found)
            .layer(middleware::from_fn_with_state(state.clone(), track_metrics))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Clone of the router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared state behind the router.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.state.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns only on an I/O error; shutdown is handled by the signal
    /// task exiting the process.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            app = %self.state.config.app_name,
            environment = %self.state.config.environment,
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await
    }
}
