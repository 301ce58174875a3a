use anyhow::Result;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::upstream::Upstream;

pub mod handlers;
pub mod models;

/// Shared, read-only state for the gateway handlers.
pub struct AppState {
    pub api_key: String,
    pub upstream: Upstream,
}

impl AppState {
    pub fn new(api_key: impl Into<String>, upstream: Upstream) -> AppState {
        AppState {
            api_key: api_key.into(),
            upstream,
        }
    }

    pub fn from_config(config: &Config) -> Result<AppState> {
        Ok(Self::new(config.api_key.clone(), Upstream::from_config(config)?))
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::search_handler))
        .route("/api/search", get(handlers::search_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(state)
        .layer(cors)
}
