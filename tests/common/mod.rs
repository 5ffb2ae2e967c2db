//! Shared utilities for integration tests.

use std::net::SocketAddr;

use lead_relay::config::RelayConfig;
use lead_relay::http::HttpServer;
use lead_relay::lifecycle::Shutdown;
use tokio::net::TcpListener;
use wiremock::MockServer;

pub const WEBHOOK_PATH: &str = "/webhook/lead-submit";

/// A relay serving on an ephemeral local port.
pub struct RunningRelay {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl RunningRelay {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for RunningRelay {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Default config with the webhook pointed at `webhook_url`.
pub fn config_for(webhook_url: String) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.webhook.url = webhook_url;
    config
}

/// Default config with the webhook pointed at a wiremock server.
pub fn config_for_mock(server: &MockServer) -> RelayConfig {
    config_for(format!("{}{}", server.uri(), WEBHOOK_PATH))
}

/// Start the relay. The listener is bound before returning, so requests can
/// be sent immediately.
pub async fn spawn_relay(config: RelayConfig) -> RunningRelay {
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningRelay { addr, shutdown }
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
