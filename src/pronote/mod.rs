pub mod client;
pub mod dates;
pub mod error;
pub mod fixture;
pub mod models;
pub mod sidecar;

use std::sync::Arc;
use std::time::Duration;

pub use client::{PronoteApi, PronoteResult};
pub use error::{translate, ErrorCode, PronoteError, TranslatedError};
pub use fixture::{FixtureClient, FixtureData};
pub use models::{Credentials, PortalUser, User};
pub use sidecar::SidecarClient;

use crate::config::{PronoteBackend, PronoteConfig};

/// Build the client selected by configuration
pub fn build_client(config: &PronoteConfig) -> anyhow::Result<Arc<dyn PronoteApi>> {
    match config.backend {
        PronoteBackend::Fixture => {
            let data = match &config.fixture_path {
                Some(path) => FixtureData::load(path)?,
                None => FixtureData::demo(),
            };
            tracing::info!(
                "Using fixture Pronote backend (account '{}')",
                data.account.username
            );
            Ok(Arc::new(FixtureClient::new(data)))
        }
        PronoteBackend::Sidecar => {
            let timeout = Duration::from_secs(config.request_timeout_secs);
            let client = SidecarClient::new(&config.sidecar_url, timeout)?;
            tracing::info!("Using Pronote bridge at {}", config.sidecar_url);
            Ok(Arc::new(client))
        }
    }
}
