use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, Empty, error_response};

/// DELETE /api/courses/{course_id}/assignments/{assignment_id}
///
/// Delete an assignment. Its attachment references and all submissions
/// against it are removed in the same operation.
///
/// ### Responses
/// - `200 OK` on success
/// - `403 Forbidden` when the caller does not own the assignment
/// - `404 Not Found` when the assignment is absent from the course
pub async fn delete_assignment(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    match AssignmentModel::remove(app_state.db(), course_id, assignment_id, claims.sub).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<Empty>::success(
                Empty,
                "Assignment deleted successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
