//! Noor gateway - backend library
//!
//! HTTP front for the MuslimLife app: prayer timings from AlAdhan with
//! next-prayer selection, plus Gemini-backed insights and chat.

use axum::{routing::get, Router};
use shared::CalculationMethod;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod clock;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use crate::clock::Clock;
use crate::error::{AppError, AppResult};
use crate::external::{TextGenerationProvider, TimingsProvider};

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub timings: Arc<dyn TimingsProvider>,
    pub text_generation: Arc<dyn TextGenerationProvider>,
    pub clock: Arc<dyn Clock>,
    pub default_method: CalculationMethod,
}

impl AppState {
    pub fn new(
        config: Config,
        timings: Arc<dyn TimingsProvider>,
        text_generation: Arc<dyn TextGenerationProvider>,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        let default_method = CalculationMethod::try_from(i64::from(config.timings.default_method))
            .map_err(|m| AppError::Configuration(format!("timings.default_method: {}", m)))?;

        Ok(Self {
            config: Arc::new(config),
            timings,
            text_generation,
            clock,
            default_method,
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Noor Prayer & Insight Gateway v1.0"
}
