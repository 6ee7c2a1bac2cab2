use axum::{Json, Router, response::IntoResponse, routing::get};
use common::state::AppState;

use crate::response::ApiResponse;

/// Builds the `/health` route group: a single `GET /health` endpoint for
/// uptime checks, load balancers, or deployment health monitoring.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// Returns a simple success response to indicate the API is running.
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK", "Health check passed"))
}
