use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use vitrine::api::{self, app_state::AppState};
use vitrine::config::ConfigLoader;
use vitrine::observability::{ObservabilityState, create_observability_router, init_tracing};
use vitrine::render::PageRenderer;
use vitrine::services::PortfolioContent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    init_tracing(&config.logging);
    ConfigLoader::validate(&config)?;
    info!(environment = %config.environment, "Starting Vitrine...");

    let content =
        PortfolioContent::new(config.timing.clone()).context("invalid portfolio catalog")?;
    info!(
        roles = content.role_broadcaster().roles().len(),
        interval_ms = config.timing.role_interval_ms,
        "Content provider initialized"
    );

    let renderer = PageRenderer::new()?;
    info!("Page template compiled");

    let app_state = AppState::new(content, renderer);
    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        app_state.roles.clone(),
    ));

    let api_router = api::initialize_api(app_state).await?;
    let router = create_observability_router(observability_state).merge(api_router);
    info!("Router created with observability endpoints");

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
