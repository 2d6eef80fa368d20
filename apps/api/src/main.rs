mod config;
mod errors;
mod extract;
mod routes;
mod scoring;
mod session;
mod state;
mod upload;
mod views;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::routes::build_router;
use crate::session::models::Severity;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeRanker v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone(), Arc::new(PdfTextExtractor));

    state.storage.ensure_root().await.with_context(|| {
        format!(
            "Failed to create upload directory {}",
            state.storage.root().display()
        )
    })?;
    info!("Upload folder: {}", state.storage.root().display());
    info!(
        "Batch limits: min {} / max {} files, body limit {} bytes",
        config.min_files, config.max_files, config.max_upload_bytes
    );

    state.store.lock().await.log(
        format!(
            "ResumeRanker system started - Minimum {} resumes required",
            config.min_files
        ),
        Severity::Success,
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
