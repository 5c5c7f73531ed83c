#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use pronote_portal::app::{router, AppState};
use pronote_portal::pronote::{FixtureClient, FixtureData, PronoteApi};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Serve the portal router on a free port inside the current test runtime
    pub async fn spawn(client: Arc<dyn PronoteApi>) -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        let app = router(AppState::new(client));
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let server = Self { port, base_url };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    pub async fn spawn_fixture() -> Result<Self> {
        Self::spawn(Arc::new(FixtureClient::demo())).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Login body accepted by the demo fixture account
pub fn demo_login() -> Value {
    let account = FixtureData::demo().account;
    json!({
        "url": account.url,
        "username": account.username,
        "password": account.password,
    })
}

pub async fn login_demo(server: &TestServer, client: &reqwest::Client) -> Result<()> {
    let res = client
        .post(server.url("/api/auth/login"))
        .json(&demo_login())
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "demo login failed: {}", res.status());
    Ok(())
}
