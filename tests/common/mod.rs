//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use docker_status_service::{AppConfig, HttpServer, MetricsRegistry};
use tokio::net::TcpListener;

/// A running server plus the registry it records into.
pub struct TestServer {
    pub addr: SocketAddr,
    pub metrics: Arc<MetricsRegistry>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service on a loopback port with the given configuration.
pub async fn start_server(port: u16, mut config: AppConfig) -> TestServer {
    config.host = "127.0.0.1".into();
    config.port = port;

    let metrics = Arc::new(MetricsRegistry::new().unwrap());
    let server = HttpServer::with_metrics(config, metrics.clone());
    let listener = TcpListener::bind(server.config().bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    TestServer { addr, metrics }
}

/// Client with pooling disabled so every request is independent.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Value of the first sample of `family` whose label set contains all `labels`.
#[allow(dead_code)]
pub fn sample_value(body: &str, family: &str, labels: &[&str]) -> Option<f64> {
    body.lines()
        .filter(|line| line.starts_with(&format!("{}{{", family)))
        .find(|line| labels.iter().all(|l| line.contains(l)))
        .and_then(|line| line.rsplit(' ').next())
        .and_then(|v| v.parse().ok())
}
