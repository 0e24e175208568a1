//! Axum router configuration with middleware.
//!
//! JSON endpoints: `/submit_contact`, `/chat_send`, `/health`.
//! Pages: `/`, `/home`, the navbar redirects, and `/static/*`, all served
//! from the configured web directory.
//! Middleware: CORS, tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.web_dir();

    let router = Router::new()
        .route("/submit_contact", post(handlers::contact::submit_contact))
        .route("/chat_send", post(handlers::chat::chat_send))
        .route("/health", get(health_check));

    handlers::pages::routes(router, &web_dir)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
