use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::{
    FileRef, assignment::Model as AssignmentModel, submission::Model as SubmissionModel,
};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::submissions::common::SubmissionResponse;

#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Option<Vec<FileRef>>,
}

/// POST /api/courses/{course_id}/assignments/{assignment_id}/submissions
///
/// Record the caller's submission for the assignment. The late/on-time
/// classification is taken from the server clock at this moment and never
/// changes afterwards; submitting exactly at the due date counts as on
/// time. Each student gets exactly one submission per assignment.
///
/// ### Request Body (JSON)
/// - `text` (`string`, optional)
/// - `attachments` (`array`, optional): `{ filename, path }` references
///
/// At least one of the two must be present and non-empty.
///
/// ### Responses
/// - `201 Created` with the submission, including its status
/// - `400 Bad Request` when both text and attachments are missing
/// - `404 Not Found` when the assignment is absent from the course
/// - `409 Conflict` when the caller has already submitted
pub async fn create_submission(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id)): Path<(i64, i64)>,
    AuthUser(claims): AuthUser,
    Json(req): Json<SubmissionRequest>,
) -> impl IntoResponse {
    // Resolve through the course so the nested path cannot reach another
    // course's assignment.
    if let Err(e) = AssignmentModel::find_in_course(app_state.db(), course_id, assignment_id).await
    {
        return error_response(e);
    }

    let attachments = req.attachments.unwrap_or_default();

    match SubmissionModel::submit(
        app_state.db(),
        assignment_id,
        claims.sub,
        req.text,
        &attachments,
    )
    .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission recorded successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
