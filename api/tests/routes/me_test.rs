use axum::http::StatusCode;
use chrono::{Duration, Utc};
use db::models::assignment::Model as AssignmentModel;
use db::models::course::Model as CourseModel;
use db::models::submission::Model as SubmissionModel;
use db::models::user::Role;
use serde_json::json;
use tower::ServiceExt;

use crate::helpers::app::{get_json_body, json_request, make_test_app, user_with_token};

#[tokio::test]
async fn my_assignments_lists_only_the_callers() {
    let (app, db) = make_test_app().await;
    let (inst1, token1) = user_with_token(&db, "inst1", Role::Instructor).await;
    let (inst2, _) = user_with_token(&db, "inst2", Role::Instructor).await;
    let course = CourseModel::create(&db, "MATH101", "Algebra I")
        .await
        .unwrap();

    let due = Utc::now() + Duration::days(7);
    AssignmentModel::create(&db, course.id, inst1.id, "Mine", "desc", due, 10.0, &[])
        .await
        .unwrap();
    AssignmentModel::create(&db, course.id, inst2.id, "Theirs", "desc", due, 10.0, &[])
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("GET", "/api/me/assignments", Some(&token1), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Mine");
}

#[tokio::test]
async fn my_assignments_is_empty_for_students() {
    let (app, db) = make_test_app().await;
    let (_, token) = user_with_token(&db, "student1", Role::Student).await;

    let response = app
        .oneshot(json_request("GET", "/api/me/assignments", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn my_submissions_include_assignment_context() {
    let (app, db) = make_test_app().await;
    let (instructor, _) = user_with_token(&db, "inst1", Role::Instructor).await;
    let (student, token) = user_with_token(&db, "student1", Role::Student).await;
    let course = CourseModel::create(&db, "MATH101", "Algebra I")
        .await
        .unwrap();

    let assignment = AssignmentModel::create(
        &db,
        course.id,
        instructor.id,
        "Algebra HW",
        "Solve the exercises",
        Utc::now() + Duration::days(7),
        100.0,
        &[],
    )
    .await
    .unwrap();

    SubmissionModel::submit(&db, assignment.id, student.id, Some("my answers".into()), &[])
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("GET", "/api/me/submissions", Some(&token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_json_body(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"], "submitted");
    assert_eq!(items[0]["assignment_title"], "Algebra HW");
    assert_eq!(items[0]["assignment_max_points"], 100.0);
    assert_eq!(items[0]["course_id"], course.id);
}

#[tokio::test]
async fn me_routes_require_authentication() {
    let (app, _db) = make_test_app().await;

    for uri in ["/api/me/assignments", "/api/me/submissions"] {
        let response = app
            .clone()
            .oneshot(json_request("GET", uri, None, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let response = app
        .oneshot(json_request(
            "GET",
            "/api/me/submissions",
            Some("not-a-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = get_json_body(response).await;
    assert_eq!(json["message"], "Authentication required");
}
