//! Submission routes module.
//!
//! Nested under `/courses/{course_id}/assignments/{assignment_id}/submissions`.
//! Any authenticated user may submit; reading the roster and grading are
//! instructor-gated, with ownership of the assignment enforced in the
//! domain layer.

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};
use ::common::state::AppState;

use crate::auth::guards::require_instructor;
use get::get_submissions;
use post::create_submission;
use put::grade_submission;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/submissions` route group.
///
/// Routes:
/// - `POST /`                         → Submit work (authenticated)
/// - `GET  /`                         → List submissions (owning instructor)
/// - `PUT  /{submission_id}/grade`    → Record a grade (owning instructor)
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission))
        .route(
            "/",
            get(get_submissions).route_layer(from_fn(require_instructor)),
        )
        .route(
            "/{submission_id}/grade",
            put(grade_submission).route_layer(from_fn(require_instructor)),
        )
}
