use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use skydrop_core::ClaimConfig;
use skydrop_gateway::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Arc::new(ClaimConfig::from_env());
    if config.secret_token().is_empty() {
        tracing::warn!("SECRET_TOKEN is unset; only an empty bearer token will verify");
    }
    let state = AppState::new(config);

    let addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "skydrop gateway listening");

    axum::serve(listener, router(state))
        .await
        .context("server terminated")?;
    Ok(())
}
