//! HTTP adapter.
//!
//! Exposes the planner over `GET /when-to-leave` with permissive CORS, plus a
//! liveness probe and an optional pre-built frontend.

pub mod error;
pub mod handler;
pub mod response;

use std::path::Path;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::port::PlanPickup;

/// Shared handler state.
pub struct AppState {
    pub planner: Arc<dyn PlanPickup>,
}

impl AppState {
    pub fn new(planner: Arc<dyn PlanPickup>) -> Self {
        Self { planner }
    }
}

/// Build the application router.
///
/// When `static_dir` holds an `index.html`, unknown paths are served from it
/// and anything that is not a file gets `index.html`, so client-side routes
/// load the app. Otherwise `/` answers with a placeholder message.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/when-to-leave", get(handler::when_to_leave))
        .route("/health", get(handler::health));

    let app = match static_dir.filter(|dir| dir.join("index.html").is_file()) {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api.route("/", get(handler::not_ready)),
    };

    app.with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
