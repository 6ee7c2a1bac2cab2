use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::{assignment::Model as AssignmentModel, submission::Model as SubmissionModel};

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::submissions::common::SubmissionResponse;

/// GET /api/courses/{course_id}/assignments/{assignment_id}/submissions
///
/// List every submission recorded against the assignment, in insertion
/// order. Only the assignment's owning instructor may call this.
///
/// ### Responses
/// - `200 OK` with the submission list (possibly empty)
/// - `403 Forbidden` when the caller does not own the assignment
/// - `404 Not Found` when the assignment is absent from the course
pub async fn get_submissions(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    if let Err(e) = AssignmentModel::find_in_course(app_state.db(), course_id, assignment_id).await
    {
        return error_response(e);
    }

    match SubmissionModel::list_for_assignment(app_state.db(), assignment_id, claims.sub).await {
        Ok(submissions) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                submissions
                    .into_iter()
                    .map(SubmissionResponse::from)
                    .collect::<Vec<_>>(),
                "Submissions retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
