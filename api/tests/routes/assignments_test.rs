use axum::http::StatusCode;
use chrono::{Duration, Utc};
use db::models::course::Model as CourseModel;
use db::models::user::Role;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::helpers::app::{get_json_body, json_request, make_test_app, user_with_token};

async fn seed_course(db: &DatabaseConnection) -> i64 {
    CourseModel::create(db, "MATH101", "Algebra I")
        .await
        .unwrap()
        .id
}

fn assignment_payload(due_date: &str) -> Value {
    json!({
        "title": "Algebra HW",
        "description": "Solve the exercises",
        "due_date": due_date,
        "max_points": 100.0,
        "attachments": [{"filename": "sheet.pdf", "path": "blobs/sheet.pdf"}]
    })
}

#[tokio::test]
async fn instructor_creates_assignment_with_attachments() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let course_id = seed_course(&db).await;

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&token),
            Some(&assignment_payload(&due)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_json_body(response).await;
    assert_eq!(json["data"]["title"], "Algebra HW");
    assert_eq!(json["data"]["max_points"], 100.0);
    let assignment_id = json["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "GET",
            &format!("/api/courses/{course_id}/assignments/{assignment_id}"),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    let files = json["data"]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["filename"], "sheet.pdf");
}

#[tokio::test]
async fn non_positive_max_points_is_rejected() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let course_id = seed_course(&db).await;

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let mut payload = assignment_payload(&due);
    payload["max_points"] = json!(0.0);

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&token),
            Some(&payload),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert_eq!(json["message"], "max_points must be a positive number");
}

#[tokio::test]
async fn malformed_due_date_is_rejected() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let course_id = seed_course(&db).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&token),
            Some(&assignment_payload("next tuesday")),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_json_body(response).await;
    assert!(json["message"].as_str().unwrap().contains("due_date"));
}

#[tokio::test]
async fn create_in_missing_course_is_not_found() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "inst1", Role::Instructor).await;

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/courses/9999/assignments",
            Some(&token),
            Some(&assignment_payload(&due)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn student_cannot_create_or_edit_assignments() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "student1", Role::Student).await;
    let course_id = seed_course(&db).await;

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&token),
            Some(&assignment_payload(&due)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/courses/{course_id}/assignments/1"),
            Some(&token),
            Some(&json!({"title": "Hijacked"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn only_the_owner_may_edit_or_delete() {
    let (app, db) = make_test_app().await;
    let (_, owner_token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let (_, other_token) = user_with_token(&db, "inst2", Role::Instructor).await;
    let course_id = seed_course(&db).await;

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&owner_token),
            Some(&assignment_payload(&due)),
        ))
        .await
        .unwrap();
    let assignment_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/courses/{course_id}/assignments/{assignment_id}");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            Some(&other_token),
            Some(&json!({"title": "Hijacked"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(json_request("DELETE", &uri, Some(&other_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Owner's partial edit touches only the given fields.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &uri,
            Some(&owner_token),
            Some(&json!({"title": "Algebra HW v2", "max_points": 50.0})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_json_body(response).await;
    assert_eq!(json["data"]["title"], "Algebra HW v2");
    assert_eq!(json["data"]["max_points"], 50.0);
    assert_eq!(json["data"]["description"], "Solve the exercises");

    let response = app
        .clone()
        .oneshot(json_request("DELETE", &uri, Some(&owner_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request("GET", &uri, Some(&owner_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assignment_lookup_is_scoped_to_its_course() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let course_id = seed_course(&db).await;
    let other_course = CourseModel::create(&db, "CS101", "Programming")
        .await
        .unwrap();

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&token),
            Some(&assignment_payload(&due)),
        ))
        .await
        .unwrap();
    let assignment_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            "GET",
            &format!(
                "/api/courses/{}/assignments/{assignment_id}",
                other_course.id
            ),
            Some(&token),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
