//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, tracing), and creates
//! the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Reassignment pipeline
        .route("/time-off", post(handlers::submit_time_off))
        // Profitability tracking
        .route(
            "/projects/{project_id}/baseline",
            post(handlers::create_baseline),
        )
        .route(
            "/projects/{project_id}/snapshot",
            post(handlers::snapshot_after_change),
        )
        .route("/projects/{project_id}/trends", get(handlers::get_trends))
        // Structured dispatch
        .route("/requests", post(handlers::dispatch_request))
        // Live event stream
        .route("/events/stream", get(handlers::stream_events));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
