//! Login route.
//!
//! Credentials are verified against the argon2 hash stored on the user
//! record; success yields a signed JWT carrying the user's id and role.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use common::{format_validation_errors, state::AppState};
use db::models::user::Model as UserModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::generate_jwt;
use crate::response::{ApiResponse, error_response};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub token: String,
    pub expires_at: String,
}

/// POST /api/auth/login
///
/// ### Request Body
/// ```json
/// { "username": "inst1", "password": "secret" }
/// ```
///
/// ### Responses
/// - `200 OK` with the user summary, token, and expiry
/// - `400 Bad Request` on missing fields
/// - `401 Unauthorized` on unknown username or wrong password (the two are
///   deliberately indistinguishable)
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    if let Err(validation_errors) = req.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<LoginResponse>::error(
                format_validation_errors(&validation_errors),
            )),
        );
    }

    let user = match UserModel::verify_credentials(app_state.db(), &req.username, &req.password)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<LoginResponse>::error(
                    "Invalid username or password",
                )),
            );
        }
        Err(e) => return error_response(e),
    };

    let (token, expires_at) = generate_jwt(user.id, user.role);

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            LoginResponse {
                id: user.id,
                username: user.username,
                email: user.email,
                role: user.role.to_string(),
                token,
                expires_at,
            },
            "Login successful",
        )),
    )
}
