//! Compliance API Server

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use compliance_api::{build_router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("compliance_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let config = ApiConfig::load()?;
    let state = Arc::new(AppState::new(config));

    info!(
        "Loaded rule set v{} ({} rules)",
        state.engine.rules().version(),
        state.engine.rules().len()
    );

    let app = build_router(state.clone());

    let addr = state.config.socket_addr()?;
    info!("Starting Compliance API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
