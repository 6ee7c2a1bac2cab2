//! Course routes module.
//!
//! Provides the `/courses` route group plus the nested `/assignments` group
//! (and, below that, `/submissions`).
//!
//! Course creation requires an instructor or admin token; reading the
//! catalog only requires authentication (enforced one level up).

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;

use crate::auth::guards::require_instructor;
use crate::routes::courses::assignments::assignment_routes;
use get::{get_course, get_courses};
use post::create_course;

pub mod assignments;
pub mod get;
pub mod post;

/// Builds the `/courses` route group.
///
/// Routes:
/// - `POST /courses`              → Create a course (instructor/admin)
/// - `GET  /courses`              → List courses
/// - `GET  /courses/{course_id}`  → Course details
///
/// Nested:
/// - `/courses/{course_id}/assignments` → `assignment_routes`
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_course).route_layer(from_fn(require_instructor)),
        )
        .route("/", get(get_courses))
        .route("/{course_id}", get(get_course))
        .nest("/{course_id}/assignments", assignment_routes())
}
