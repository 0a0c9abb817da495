//! Compliance API - HTTP front end for the SOAP compliance engine
//!
//! Provides REST endpoints for:
//! - Checking a generated note (and its transcript) for compliance
//! - Listing the active rule table
//! - Health checks

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ApiConfig;
pub use state::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/notes/check-compliance",
            post(handlers::check_compliance),
        )
        .route("/api/rules", get(handlers::list_rules))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
