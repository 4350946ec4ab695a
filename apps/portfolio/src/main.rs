mod config;
mod content;
mod errors;
mod routes;
mod state;
mod view;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::{CONTENT, PROFILE};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    CONTENT.validate().context("content table is invalid")?;
    info!(
        "Content table loaded: {} jobs, {} education entries",
        CONTENT.experience.content.len(),
        CONTENT.education.content.len()
    );

    info!("Serving assets from {}", config.assets_dir.display());
    if !config.stylesheet().is_file() {
        warn!("Stylesheet not found at {}", config.stylesheet().display());
    }
    if config.cv_file.is_file() {
        info!("CV document: {}", config.cv_file.display());
    } else {
        // Downloads will surface the browser's native failure
        warn!("CV document not found at {}", config.cv_file.display());
    }

    let state = AppState {
        config: config.clone(),
        content: &CONTENT,
        profile: &PROFILE,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
