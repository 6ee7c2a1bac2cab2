use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::{Model as AssignmentModel, UpdateAssignment};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::common::{
    AssignmentResponse, UpdateAssignmentRequest, parse_datetime,
};

/// PUT /api/courses/{course_id}/assignments/{assignment_id}
///
/// Partially update an assignment. Absent fields are left unchanged.
/// Only the owning instructor may edit; other instructors get `403`.
///
/// Moving the due date never reclassifies submissions already recorded.
///
/// ### Responses
/// - `200 OK` with the updated assignment
/// - `400 Bad Request` on empty fields, malformed datetime, or
///   non-positive `max_points`
/// - `403 Forbidden` when the caller does not own the assignment
/// - `404 Not Found` when the assignment is absent from the course
pub async fn edit_assignment(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateAssignmentRequest>,
) -> impl IntoResponse {
    let due_date = match req.due_date {
        Some(ref raw) => match parse_datetime::<AssignmentResponse>(raw, "due_date") {
            Ok(dt) => Some(dt),
            Err(resp) => return resp,
        },
        None => None,
    };

    let patch = UpdateAssignment {
        title: req.title,
        description: req.description,
        due_date,
        max_points: req.max_points,
    };

    match AssignmentModel::edit(app_state.db(), course_id, assignment_id, claims.sub, patch).await
    {
        Ok(assignment) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment updated successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
