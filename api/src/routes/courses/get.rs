use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use common::state::AppState;
use db::models::course::Model as CourseModel;
use serde::Serialize;

use crate::response::{ApiResponse, error_response};

#[derive(Debug, Serialize, Default)]
pub struct CourseResponse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CourseModel> for CourseResponse {
    fn from(c: CourseModel) -> Self {
        Self {
            id: c.id,
            code: c.code,
            title: c.title,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// GET /api/courses
///
/// List all courses in insertion order.
pub async fn get_courses(State(app_state): State<AppState>) -> impl IntoResponse {
    match CourseModel::list(app_state.db()).await {
        Ok(courses) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                courses
                    .into_iter()
                    .map(CourseResponse::from)
                    .collect::<Vec<_>>(),
                "Courses retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}

/// GET /api/courses/{course_id}
///
/// Retrieve a single course.
///
/// ### Responses
/// - `200 OK` with the course record
/// - `404 Not Found` when the course does not exist
pub async fn get_course(
    State(app_state): State<AppState>,
    Path(course_id): Path<i64>,
) -> impl IntoResponse {
    match CourseModel::find_by_id(app_state.db(), course_id).await {
        Ok(course) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                CourseResponse::from(course),
                "Course retrieved successfully",
            )),
        ),
        Err(e) => error_response(e),
    }
}
