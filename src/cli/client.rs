use anyhow::Context;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::pronote::Credentials;

/// Response envelope as received from the portal
#[derive(Debug, Clone)]
pub struct Envelope {
    pub status: StatusCode,
    pub body: Value,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.status.is_success() && self.body["success"] == Value::Bool(true)
    }

    pub fn error_message(&self) -> String {
        self.body["error"]
            .as_str()
            .map(String::from)
            .unwrap_or_else(|| format!("request failed with status {}", self.status))
    }

    pub fn error_code(&self) -> Option<&str> {
        self.body["code"].as_str()
    }
}

/// Thin reqwest wrapper over the portal's HTTP routes
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: Client,
    base_url: Url,
}

impl PortalClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn url(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid route '{}'", path))
    }

    pub async fn login(&self, credentials: &Credentials) -> anyhow::Result<Envelope> {
        let request = self.http.post(self.url("/api/auth/login")?).json(credentials);
        Self::read(request).await
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> anyhow::Result<Envelope> {
        let request = self.http.get(self.url(path)?).query(query);
        Self::read(request).await
    }

    async fn read(request: reqwest::RequestBuilder) -> anyhow::Result<Envelope> {
        let response = request.send().await.context("portal unreachable")?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .with_context(|| format!("portal answered {} with a non-JSON body", status))?;
        Ok(Envelope { status, body })
    }
}
