//! Route definitions for the Noor gateway

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Public API routes. Paths match what the mobile app already calls.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/getPrayerTimes", get(handlers::get_prayer_times))
        .route("/generateInsight", post(handlers::generate_insight))
        .route("/aiChat", post(handlers::ai_chat))
}
