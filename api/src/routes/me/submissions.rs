use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::submission::Model as SubmissionModel;
use serde::Serialize;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::submissions::common::SubmissionResponse;

/// A submission paired with a summary of the assignment it answers, so the
/// caller can render a worklist without extra round trips.
#[derive(Debug, Serialize, Default)]
pub struct MySubmissionResponse {
    #[serde(flatten)]
    pub submission: SubmissionResponse,
    pub assignment_title: String,
    pub assignment_due_date: String,
    pub assignment_max_points: f64,
    pub course_id: i64,
}

/// GET /api/me/submissions
///
/// List the caller's submissions with their parent assignments, in
/// insertion order.
pub async fn get_my_submissions(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    match SubmissionModel::list_for_student(app_state.db(), claims.sub).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                rows.into_iter()
                    .map(|(submission, assignment)| MySubmissionResponse {
                        submission: SubmissionResponse::from(submission),
                        assignment_title: assignment.title,
                        assignment_due_date: assignment.due_date.to_rfc3339(),
                        assignment_max_points: assignment.max_points,
                        course_id: assignment.course_id,
                    })
                    .collect::<Vec<_>>(),
                "Submissions retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
