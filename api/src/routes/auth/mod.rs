use axum::{Router, routing::post};
use common::state::AppState;

use post::login;

pub mod post;

/// Builds the `/auth` route group.
///
/// Routes:
/// - `POST /auth/login` → Exchange username + password for a JWT
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
