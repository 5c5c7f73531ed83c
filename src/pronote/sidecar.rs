use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::client::{PronoteApi, PronoteResult};
use super::error::PronoteError;
use super::models::{Credentials, User};

/// Error body a bridge returns on any non-2xx status
#[derive(Debug, Deserialize)]
struct BridgeError {
    code: Option<String>,
    message: Option<String>,
}

/// Pronote backend that delegates to a bridge process speaking JSON over HTTP.
///
/// The bridge runs the actual Pronote client and keeps the session; this type
/// only maps the four portal calls onto its routes:
/// `POST /login`, `GET /grades`, `GET /homework`, `GET /timetable`.
#[derive(Debug, Clone)]
pub struct SidecarClient {
    client: Client,
    base_url: Url,
}

impl SidecarClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> PronoteResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PronoteError::Other(format!("invalid bridge route '{}': {}", path, e)))
    }

    async fn send<T: serde::de::DeserializeOwned>(&self, request: RequestBuilder) -> PronoteResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| PronoteError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| PronoteError::Other(format!("invalid bridge response: {}", e)));
        }

        let body = response.json::<BridgeError>().await.ok();
        Err(bridge_failure(status, body))
    }
}

fn bridge_failure(status: StatusCode, body: Option<BridgeError>) -> PronoteError {
    let (code, message) = match body {
        Some(BridgeError { code, message }) => (code, message),
        None => (None, None),
    };
    let message = message.unwrap_or_else(|| format!("bridge responded with {}", status));

    match code.as_deref() {
        Some("WRONG_CREDENTIALS") => PronoteError::WrongCredentials(message),
        Some("NOT_AUTHENTICATED") => PronoteError::NotAuthenticated,
        Some("SESSION_EXPIRED") => PronoteError::SessionExpired,
        Some(other) => PronoteError::Upstream {
            code: other.to_string(),
            message,
        },
        None if status == StatusCode::UNAUTHORIZED => PronoteError::NotAuthenticated,
        None => PronoteError::Other(message),
    }
}

fn format_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl PronoteApi for SidecarClient {
    fn backend(&self) -> &'static str {
        "sidecar"
    }

    async fn login(&self, credentials: Credentials) -> PronoteResult<User> {
        let url = self.endpoint("login")?;
        self.send(self.client.post(url).json(&credentials)).await
    }

    async fn get_grades(&self, period: Option<String>) -> PronoteResult<Value> {
        let url = self.endpoint("grades")?;
        let mut request = self.client.get(url);
        if let Some(period) = period {
            request = request.query(&[("period", period)]);
        }
        self.send(request).await
    }

    async fn get_homework(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> PronoteResult<Value> {
        let url = self.endpoint("homework")?;
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("from", format_date(from)));
        }
        if let Some(to) = to {
            query.push(("to", format_date(to)));
        }
        self.send(self.client.get(url).query(&query)).await
    }

    async fn get_timetable(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> PronoteResult<Value> {
        let url = self.endpoint("timetable")?;
        let query = [("from", format_date(from)), ("to", format_date(to))];
        self.send(self.client.get(url).query(&query)).await
    }
}
