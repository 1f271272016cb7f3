mod analysis;
mod config;
mod errors;
mod extract;
mod layout;
mod llm_client;
mod models;
mod pdf;
mod routes;
mod state;
mod validation;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::select_extractor;
use crate::layout::PageConfig;
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

    info!("Starting resume parser API v{}", env!("CARGO_PKG_VERSION"));

    // Extraction engine: regex by default, remote via ENABLE_LLM_EXTRACTION
    // plus an API key.
    let extractor = select_extractor(&config);
    if config.enable_llm_extraction && config.llm_api_key.is_some() {
        info!("LLM extraction enabled (model: {})", llm_client::MODEL);
    } else {
        info!("Regex extraction engine selected");
    }

    let page_config = PageConfig::default();
    info!(
        "Page config: {}px tall, {}px padding",
        page_config.page_height, page_config.padding
    );

    let state = AppState {
        config: config.clone(),
        extractor,
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
