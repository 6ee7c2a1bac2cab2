use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;

use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::common::{
    AssignmentDetailResponse, AssignmentResponse, FileResponse,
};

/// GET /api/courses/{course_id}/assignments
///
/// List the course's assignments in insertion order.
///
/// ### Responses
/// - `200 OK` with the assignment list (possibly empty)
/// - `404 Not Found` when the course does not exist
pub async fn get_assignments(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match AssignmentModel::list_for_course(app_state.db(), course_id).await {
        Ok(assignments) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assignments
                    .into_iter()
                    .map(AssignmentResponse::from)
                    .collect::<Vec<_>>(),
                "Assignments retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/courses/{course_id}/assignments/{assignment_id}
///
/// Retrieve one assignment with its attachment references.
///
/// ### Responses
/// - `200 OK` with the assignment and its files
/// - `404 Not Found` when the assignment is absent or belongs to a
///   different course
pub async fn get_assignment(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let assignment =
        match AssignmentModel::find_in_course(app_state.db(), course_id, assignment_id).await {
            Ok(a) => a,
            Err(e) => return error_response(e),
        };

    let files = match assignment.files(app_state.db()).await {
        Ok(files) => files,
        Err(e) => return error_response(e),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            AssignmentDetailResponse {
                assignment: AssignmentResponse::from(assignment),
                files: files.into_iter().map(FileResponse::from).collect(),
            },
            "Assignment retrieved successfully",
        )),
    )
}
