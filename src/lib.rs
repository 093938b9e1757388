use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::app::envy::Envy;

pub mod app;
pub mod client;
pub mod generations;

/// Oversized bodies are rejected by the JSON extractor, so they still get a
/// JSON error body.
pub static MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub client: reqwest::Client,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::OPTIONS]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // generations
        .route(
            "/generate",
            post(generations::controller::generate_images)
                .fallback(app::controller::method_not_allowed),
        )
        .fallback(app::controller::not_found)
        // layers
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .with_state(state)
}
