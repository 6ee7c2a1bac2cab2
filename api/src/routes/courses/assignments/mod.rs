//! Assignment routes module.
//!
//! All routes here are nested under `/courses/{course_id}/assignments`.
//! Mutating routes (create, edit, delete) require an instructor or admin
//! token; ownership of the specific assignment is checked in the domain
//! layer and surfaces as `403 Forbidden`.

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};
use ::common::state::AppState;

use crate::auth::guards::require_instructor;
use crate::routes::courses::assignments::submissions::submission_routes;
use delete::delete_assignment;
use get::{get_assignment, get_assignments};
use post::create_assignment;
use put::edit_assignment;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;
pub mod submissions;

/// Builds the `/assignments` route group.
///
/// Routes:
/// - `POST   /`                 → Create an assignment (instructor/admin)
/// - `GET    /`                 → List assignments in the course
/// - `GET    /{assignment_id}`  → Assignment details with attachments
/// - `PUT    /{assignment_id}`  → Edit an assignment (owner only)
/// - `DELETE /{assignment_id}`  → Delete an assignment (owner only)
///
/// Nested:
/// - `/{assignment_id}/submissions` → `submission_routes`
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(create_assignment).route_layer(from_fn(require_instructor)),
        )
        .route("/", get(get_assignments))
        .route("/{assignment_id}", get(get_assignment))
        .route(
            "/{assignment_id}",
            put(edit_assignment).route_layer(from_fn(require_instructor)),
        )
        .route(
            "/{assignment_id}",
            delete(delete_assignment).route_layer(from_fn(require_instructor)),
        )
        .nest("/{assignment_id}/submissions", submission_routes())
}
