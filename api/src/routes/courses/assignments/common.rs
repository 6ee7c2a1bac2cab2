//! Request and response shapes shared by the assignment handlers.

use chrono::{DateTime, Utc};
use db::models::{FileRef, assignment::Model as AssignmentModel, assignment_file};
use serde::{Deserialize, Serialize};

use crate::response::ApiResponse;
use axum::{Json, http::StatusCode};

#[derive(Debug, Deserialize)]
pub struct AssignmentRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_points: f64,
    #[serde(default)]
    pub attachments: Option<Vec<FileRef>>,
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub max_points: Option<f64>,
}

#[derive(Debug, Serialize, Default)]
pub struct AssignmentResponse {
    pub id: i64,
    pub course_id: i64,
    pub instructor_id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_points: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssignmentModel> for AssignmentResponse {
    fn from(a: AssignmentModel) -> Self {
        Self {
            id: a.id,
            course_id: a.course_id,
            instructor_id: a.instructor_id,
            title: a.title,
            description: a.description,
            due_date: a.due_date.to_rfc3339(),
            max_points: a.max_points,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AssignmentDetailResponse {
    #[serde(flatten)]
    pub assignment: AssignmentResponse,
    pub files: Vec<FileResponse>,
}

#[derive(Debug, Serialize, Default)]
pub struct FileResponse {
    pub id: i64,
    pub filename: String,
    pub path: String,
}

impl From<assignment_file::Model> for FileResponse {
    fn from(f: assignment_file::Model) -> Self {
        Self {
            id: f.id,
            filename: f.filename,
            path: f.path,
        }
    }
}

/// Parses an RFC 3339 datetime from a request body, normalizing to UTC.
///
/// Errors map to `400 Bad Request` with a field-specific message so the
/// caller knows which datetime was malformed.
pub fn parse_datetime<T: Serialize + Default>(
    value: &str,
    field: &str,
) -> Result<DateTime<Utc>, (StatusCode, Json<ApiResponse<T>>)> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(format!(
                    "Invalid {field} datetime: expected RFC 3339, e.g. 2026-09-01T12:00:00Z"
                ))),
            )
        })
}
