use anyhow::Context;
use tracing_subscriber::EnvFilter;

use pronote_portal::app::{app, AppState};
use pronote_portal::config::{self, PronoteBackend};
use pronote_portal::{is_production, pronote};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PRONOTE_BACKEND, PORTAL_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Pronote portal in {:?} mode", config.environment);

    if is_production!() && config.pronote.backend == PronoteBackend::Fixture {
        tracing::warn!("Fixture Pronote backend enabled in production; only the demo account will work");
    }

    let client = pronote::build_client(&config.pronote).context("failed to build Pronote client")?;
    let app = app(AppState::new(client), config);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Pronote portal listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
