use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::{format_validation_errors, state::AppState};
use db::models::course::Model as CourseModel;
use serde::Deserialize;
use validator::Validate;

use crate::response::{ApiResponse, error_response};
use crate::routes::courses::get::CourseResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
}

/// POST /api/courses
///
/// Create a new course. Requires an instructor or admin token.
///
/// ### Request Body (JSON)
/// - `code` (`string`, required): Unique course code, e.g. `"MATH101"`.
/// - `title` (`string`, required): Display title.
///
/// ### Responses
/// - `201 Created` with the course record
/// - `400 Bad Request` on blank fields
/// - `409 Conflict` when the code is already taken
pub async fn create_course(
    State(app_state): State<AppState>,
    Json(req): Json<CourseRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CourseResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    match CourseModel::create(app_state.db(), &req.code, &req.title).await {
        Ok(course) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course created successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
