//! Shared harness for the HTTP integration tests.
//!
//! Each test gets its own in-memory database, so tests are independent and
//! run in parallel without a shared fixture.

use std::sync::Once;

use api::auth::generate_jwt;
use api::routes::routes;
use axum::{Router, body::Body, http::Request, response::Response};
use common::state::AppState;
use db::models::user::{Model as UserModel, Role};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use serde_json::Value;

static CONFIG_INIT: Once = Once::new();

fn ensure_test_config() {
    CONFIG_INIT.call_once(|| {
        // SAFETY: runs once, before any test thread reads these variables.
        unsafe {
            std::env::set_var("DATABASE_PATH", "sqlite::memory:");
            std::env::set_var("JWT_SECRET", "test-jwt-secret");
        }
    });
}

/// Builds a router over a fresh in-memory database.
pub async fn make_test_app() -> (Router, DatabaseConnection) {
    ensure_test_config();
    let db = setup_test_db().await;
    let app = Router::new().nest("/api", routes(AppState::new(db.clone())));
    (app, db)
}

/// Creates a user and returns it with a valid bearer token.
pub async fn user_with_token(
    db: &DatabaseConnection,
    username: &str,
    role: Role,
) -> (UserModel, String) {
    let email = format!("{username}@test.com");
    let user = UserModel::create(db, username, &email, "password123", role)
        .await
        .unwrap();
    let (token, _) = generate_jwt(user.id, user.role);
    (user, token)
}

pub async fn get_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Builds a JSON request, optionally with a bearer token.
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => Body::from(serde_json::to_vec(value).unwrap()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}
