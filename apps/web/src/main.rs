mod catalog;
mod config;
mod errors;
mod matching;
mod questionnaire;
mod render;
mod roadmap;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::load_catalog;
use crate::config::Config;
use crate::matching::matcher::build_matcher;
use crate::roadmap::check_integrity;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PathWise v{}", env!("CARGO_PKG_VERSION"));

    // Career dataset is required
    let catalog = load_catalog(&config.dataset_path)?;

    for issue in check_integrity(&catalog) {
        warn!("Roadmap integrity: {issue}");
    }

    // Model load failures are logged here and surface on the results page
    let matcher = build_matcher(&config);

    let state = AppState::new(config.clone(), catalog, matcher);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
