//! Shared helpers: spawn the gateway on an ephemeral port.

#![allow(dead_code, clippy::expect_used)]

use std::net::SocketAddr;

use warehouse_gateway::app_state::AppState;
use warehouse_gateway::config::GatewayConfig;
use warehouse_gateway::router::build_app;

/// A running gateway plus a client that does not follow redirects.
#[derive(Debug)]
pub struct TestApp {
    /// Bound address.
    pub addr: SocketAddr,
    /// State shared with the running server.
    pub state: AppState,
    /// HTTP client with redirects disabled.
    pub client: reqwest::Client,
}

impl TestApp {
    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// WebSocket endpoint URL.
    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    /// Submits the HTML creation form.
    pub async fn create_via_form(&self, name: &str, capacity: &str, balance: &str) -> reqwest::Response {
        self.client
            .post(self.url("/create"))
            .form(&[
                ("name", name),
                ("capacity", capacity),
                ("initial_balance", balance),
            ])
            .send()
            .await
            .expect("create request")
    }

    /// Sends a GET.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request")
    }

    /// Sends a urlencoded POST.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(fields)
            .send()
            .await
            .expect("form request")
    }

    /// Reads `(capacity, balance)` straight from the registry.
    pub async fn pool(&self, name: &str) -> (f64, f64) {
        let summary = self
            .state
            .warehouse_service
            .get_warehouse(name)
            .await
            .expect("warehouse exists");
        (summary.capacity, summary.balance)
    }
}

/// Starts the gateway on `127.0.0.1:0`.
pub async fn spawn_app() -> TestApp {
    let config = GatewayConfig {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        ..GatewayConfig::default()
    };
    let state = AppState::new(config.event_bus_capacity);
    let app = build_app(state.clone(), &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client");

    TestApp {
        addr,
        state,
        client,
    }
}

/// Float equality within `1e-9`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
