//! Noor gateway - backend server

use noor_backend::{
    clock::SystemClock,
    config::Config,
    create_app,
    external::{http_client, AladhanClient, GeminiClient},
    AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "noor_server=debug,noor_backend=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("NOOR_LOG_FORMAT").is_ok_and(|f| f == "json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Load configuration
    let config = Config::load()?;

    tracing::info!("Starting Noor gateway");
    tracing::info!("Environment: {}", config.environment);
    if !config.gemini.has_api_key() {
        tracing::warn!("No Gemini API key configured; /generateInsight and /aiChat will fail");
    }

    // Providers share one outbound client
    let client = http_client(&config.http)?;
    let timings = AladhanClient::with_base_url(client.clone(), config.timings.base_url.clone());
    let text_generation = GeminiClient::new(client, &config.gemini);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(
        config,
        Arc::new(timings),
        Arc::new(text_generation),
        Arc::new(SystemClock),
    )?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
