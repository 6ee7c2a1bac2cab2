use axum::http::StatusCode;
use db::models::user::Role;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{get_json_body, json_request, make_test_app, user_with_token};

#[tokio::test]
async fn login_success_returns_token() {
    let (app, db) = make_test_app().await;
    let (user, _) = user_with_token(&db, "inst1", Role::Instructor).await;

    let payload = json!({"username": "inst1", "password": "password123"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", None, Some(&payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["username"], "inst1");
    assert_eq!(json["data"]["role"], "instructor");
    assert!(json["data"]["token"].as_str().is_some());
    assert!(json["data"]["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn login_wrong_password_is_unauthorized() {
    let (app, db) = make_test_app().await;
    user_with_token(&db, "student1", Role::Student).await;

    let payload = json!({"username": "student1", "password": "wrong"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", None, Some(&payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_json_body(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Invalid username or password");
}

#[tokio::test]
async fn login_unknown_user_is_unauthorized() {
    let (app, _db) = make_test_app().await;

    let payload = json!({"username": "ghost", "password": "password123"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", None, Some(&payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown username and wrong password produce the same message.
    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Invalid username or password");
}

#[tokio::test]
async fn login_blank_fields_are_rejected() {
    let (app, _db) = make_test_app().await;

    let payload = json!({"username": "", "password": ""});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", None, Some(&payload)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
