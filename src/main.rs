//! Citekit Server - bibliographic metadata normalization
//!
//! REST API server turning raw catalog records into citations.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citekit_server::{api, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("citekit_server={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Citekit Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Creator lists parsed in {} mode",
        if config.normalization.strict_creator_lists { "strict" } else { "lenient" }
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let app = api::create_router(AppState::new(&config));

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
