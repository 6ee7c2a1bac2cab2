use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::state::AppState;
use db::models::assignment::Model as AssignmentModel;

use crate::auth::claims::AuthUser;
use crate::response::{ApiResponse, error_response};
use crate::routes::courses::assignments::common::AssignmentResponse;

/// GET /api/me/assignments
///
/// List the assignments the caller owns, across all courses, in insertion
/// order. A student token gets an empty list rather than an error.
pub async fn get_my_assignments(
    State(app_state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> impl IntoResponse {
    match AssignmentModel::list_for_instructor(app_state.db(), claims.sub).await {
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
