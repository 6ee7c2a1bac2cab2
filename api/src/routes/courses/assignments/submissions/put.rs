use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::{assignment::Model as AssignmentModel, submission::Model as SubmissionModel};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::submissions::common::SubmissionResponse;

#[derive(Debug, Deserialize)]
pub struct GradeRequest {
    pub grade: f64,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// PUT /api/courses/{course_id}/assignments/{assignment_id}/submissions/{submission_id}/grade
///
/// Record a grade for a submission. The grade must lie within
/// `[0, max_points]` of the parent assignment. Grading again overwrites
/// the previous grade and feedback; the late/on-time history is kept only
/// through the status having been `late` before grading.
///
/// ### Request Body (JSON)
/// - `grade` (`float`, required)
/// - `feedback` (`string`, optional)
///
/// ### Responses
/// - `200 OK` with the graded submission
/// - `400 Bad Request` when the grade is negative, non-finite, or exceeds
///   `max_points`
/// - `403 Forbidden` when the caller does not own the assignment
/// - `404 Not Found` when the submission does not belong to this
///   assignment and course
pub async fn grade_submission(
    State(app_state): State<AppState>,
    Path((course_id, assignment_id, submission_id)): Path<(i64, i64, i64)>,
    AuthUser(claims): AuthUser,
    Json(req): Json<GradeRequest>,
) -> impl IntoResponse {
    if let Err(e) = AssignmentModel::find_in_course(app_state.db(), course_id, assignment_id).await
    {
        return error_response(e);
    }

    let submission = match SubmissionModel::find_by_id(app_state.db(), submission_id).await {
        Ok(s) => s,
        Err(e) => return error_response(e),
    };
    if submission.assignment_id != assignment_id {
        return error_response(db::error::DomainError::not_found("Submission not found"));
    }

    match SubmissionModel::grade(
        app_state.db(),
        submission_id,
        claims.sub,
        req.grade,
        req.feedback,
    )
    .await
    {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Grade recorded successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
