//! End-to-end run through the whole lifecycle: course, assignment,
//! submissions on both sides of the due date, grading, and the
//! permanence of the late label when the due date moves.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use db::models::user::Role;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{get_json_body, json_request, make_test_app, user_with_token};

#[tokio::test]
async fn algebra_homework_lifecycle() {
    let (app, db) = make_test_app().await;
    let (_, instructor_token) = user_with_token(&db, "inst1", Role::Instructor).await;
    let (_, alice_token) = user_with_token(&db, "alice", Role::Student).await;
    let (_, bob_token) = user_with_token(&db, "bob", Role::Student).await;

    // Instructor sets up the course and the homework, due in a week,
    // scored out of 100.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/courses",
            Some(&instructor_token),
            Some(&json!({"code": "MATH101", "title": "Algebra I"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let course_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();

    let due = (Utc::now() + Duration::days(7)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/courses/{course_id}/assignments"),
            Some(&instructor_token),
            Some(&json!({
                "title": "Algebra HW",
                "description": "Solve the exercises",
                "due_date": due,
                "max_points": 100.0
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let assignment_id = get_json_body(response).await["data"]["id"].as_i64().unwrap();
    let submissions_uri = format!("/api/courses/{course_id}/assignments/{assignment_id}/submissions");

    // Alice submits well before the deadline.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &submissions_uri,
            Some(&alice_token),
            Some(&json!({"text": "x = 4"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let alice_submission = get_json_body(response).await;
    assert_eq!(alice_submission["data"]["status"], "submitted");
    let alice_submission_id = alice_submission["data"]["id"].as_i64().unwrap();

    // The due date is pulled back to an hour ago. Alice's existing
    // submission keeps its on-time label.
    let past_due = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/courses/{course_id}/assignments/{assignment_id}"),
            Some(&instructor_token),
            Some(&json!({"due_date": past_due})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Bob submits now and is classified late against the new deadline.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &submissions_uri,
            Some(&bob_token),
            Some(&json!({"text": "x = 5?"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(get_json_body(response).await["data"]["status"], "late");

    // The roster shows both, with Alice still on time.
    let response = app
        .clone()
        .oneshot(json_request("GET", &submissions_uri, Some(&instructor_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let roster = get_json_body(response).await;
    let items = roster["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["status"], "submitted");
    assert_eq!(items[1]["status"], "late");

    // The instructor grades Alice's work.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("{submissions_uri}/{alice_submission_id}/grade"),
            Some(&instructor_token),
            Some(&json!({"grade": 87.5, "feedback": "Good work"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let graded = get_json_body(response).await;
    assert_eq!(graded["data"]["grade"], 87.5);
    assert_eq!(graded["data"]["status"], "graded");

    // Alice sees the grade on her own view.
    let response = app
        .oneshot(json_request("GET", "/api/me/submissions", Some(&alice_token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mine = get_json_body(response).await;
    let items = mine["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["grade"], 87.5);
    assert_eq!(items[0]["feedback"], "Good work");
    assert_eq!(items[0]["assignment_title"], "Algebra HW");
}
