pub mod api_routes;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::service::stub_service::StubService;
use api_routes::{chatbot_handler, health_handler};

/// API routes plus the built widget bundle for every other path.
pub fn create_router(svc: StubService, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/chatbot", post(chatbot_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(svc)
}
