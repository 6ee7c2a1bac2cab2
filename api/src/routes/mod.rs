//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint (public)
//! - `/auth` → Login (public)
//! - `/courses` → Course catalog plus nested assignments and submissions
//!   (authenticated users)
//! - `/me` → Caller-scoped views (owned assignments, own submissions)

use axum::{Router, middleware::from_fn};
use common::state::AppState;

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    auth::auth_routes, courses::course_routes, health::health_routes, me::me_routes,
};

pub mod auth;
pub mod courses;
pub mod health;
pub mod me;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router has its state applied and mounts all core API routes
/// under their respective base paths.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest(
            "/courses",
            course_routes().route_layer(from_fn(allow_authenticated)),
        )
        .nest("/me", me_routes().route_layer(from_fn(allow_authenticated)))
        .with_state(app_state)
}
