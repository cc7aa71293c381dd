#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use contacts_api::auth::JwtAuth;
use contacts_api::config::AppConfig;
use contacts_api::database::{ContactStore, MemoryContactStore};
use contacts_api::state::AppState;
use reqwest::StatusCode;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub jwt: JwtAuth,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Start an in-process server backed by a fresh in-memory store
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_store(Arc::new(MemoryContactStore::new())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn ContactStore>) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let jwt = JwtAuth::new(TEST_JWT_SECRET, 1)?;
        let mut config = AppConfig::development();
        config.api.enable_request_logging = false;
        let app = contacts_api::server::app(AppState::new(store, jwt.clone()), &config);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test port")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self {
            port,
            base_url,
            jwt,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn token_for(&self, user: Uuid) -> String {
        self.jwt.generate(user).expect("token generation")
    }
}
