//! Caller-scoped routes.
//!
//! Everything under `/me` is filtered by the id in the caller's token, so
//! no extra authorization checks are needed beyond authentication.

use axum::{Router, routing::get};
use common::state::AppState;

use assignments::get_my_assignments;
use submissions::get_my_submissions;

pub mod assignments;
pub mod submissions;

/// Builds the `/me` route group.
///
/// Routes:
/// - `GET /me/assignments` → Assignments owned by the caller
/// - `GET /me/submissions` → The caller's submissions with their assignments
pub fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/assignments", get(get_my_assignments))
        .route("/submissions", get(get_my_submissions))
}
