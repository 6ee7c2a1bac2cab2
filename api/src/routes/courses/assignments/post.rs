use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::common::{
    AssignmentRequest, AssignmentResponse, parse_datetime,
};

/// POST /api/courses/{course_id}/assignments
///
/// Create an assignment in the course, owned by the calling instructor.
///
/// ### Request Body (JSON)
/// - `title` (`string`, required)
/// - `description` (`string`, required)
/// - `due_date` (`string`, required): RFC 3339 datetime
/// - `max_points` (`float`, required): must be strictly positive
/// - `attachments` (`array`, optional): `{ filename, path }` references
///
/// ### Responses
/// - `201 Created` with the assignment record
/// - `400 Bad Request` on blank fields, malformed datetime, or
///   non-positive `max_points`
/// - `404 Not Found` when the course does not exist
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
    AuthUser(claims): AuthUser,
    Json(req): Json<AssignmentRequest>,
) -> impl IntoResponse {
    let due_date = match parse_datetime::<AssignmentResponse>(&req.due_date, "due_date") {
        Ok(dt) => dt,
        Err(resp) => return resp,
    };

    let attachments = req.attachments.unwrap_or_default();

    match AssignmentModel::create(
        app_state.db(),
        course_id,
        claims.sub,
        &req.title,
        &req.description,
        due_date,
        req.max_points,
        &attachments,
    )
    .await
    {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Assignment created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
