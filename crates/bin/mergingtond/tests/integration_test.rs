//! End-to-end smoke tests for the full mergingtond stack.
//!
//! Each test spins up the complete application (seeded in-memory repository,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use mergington_adapter_http_axum::router;
use mergington_adapter_http_axum::state::AppState;
use mergington_adapter_memory::InMemoryActivityRepository;
use mergington_app::services::activity_service::ActivityService;
use mergington_domain::catalog::mergington_activities;
use tower::ServiceExt;

/// Build a fully-wired router backed by a freshly seeded repository.
fn app() -> axum::Router {
    let repo = InMemoryActivityRepository::new(
        mergington_activities().expect("seed catalog should be valid"),
    );
    let state = AppState::new(ActivityService::new(repo));
    router::build(state, "static")
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(request(method, uri)).await.unwrap();
    let status = resp.status();
    let body = serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes())
        .unwrap_or(serde_json::Value::Null);
    (status, body)
}

async fn participants(app: &axum::Router, activity: &str) -> Vec<String> {
    let (status, body) = send(app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    body[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_redirect_root_to_static_index() {
    let resp = app().oneshot(request("GET", "/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = resp.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.contains("/static/index.html"));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_seeded_activities() {
    let (status, body) = send(&app(), "GET", "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let activities = body.as_object().unwrap();
    assert!(activities.contains_key("Chess Club"));
    assert!(activities.contains_key("Programming Class"));
    assert!(activities.contains_key("Basketball"));
    for details in activities.values() {
        assert!(details["description"].is_string());
        assert!(details["schedule"].is_string());
        assert!(details["max_participants"].as_u64().unwrap() > 0);
        assert!(details["participants"].is_array());
    }
}

// ---------------------------------------------------------------------------
// Signup / unregister
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_add_participant_on_signup() {
    let app = app();
    let before = participants(&app, "Chess Club").await;

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=testuser@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("testuser@mergington.edu")
    );
    let after = participants(&app, "Chess Club").await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last().unwrap(), "testuser@mergington.edu");
}

#[tokio::test]
async fn should_reject_duplicate_then_allow_unregister_for_seeded_student() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["detail"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("already signed up")
    );

    let before = participants(&app, "Chess Club").await;
    let (status, body) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/signup?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("michael@mergington.edu")
    );

    let after = participants(&app, "Chess Club").await;
    assert_eq!(after.len(), before.len() - 1);
    assert!(!after.contains(&"michael@mergington.edu".to_string()));
}

#[tokio::test]
async fn should_return_404_for_nonexistent_activity() {
    let app = app();
    for method in ["POST", "DELETE"] {
        let (status, body) = send(
            &app,
            method,
            "/activities/Nonexistent%20Club/signup?email=student@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["detail"].as_str().unwrap().contains("not found"));
    }
}

#[tokio::test]
async fn should_return_400_when_unregistering_unknown_student() {
    let (status, body) = send(
        &app(),
        "DELETE",
        "/activities/Chess%20Club/signup?email=notexist@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("not signed up"));
}

#[tokio::test]
async fn should_restore_participants_after_signup_then_unregister() {
    let app = app();
    let before = participants(&app, "Chess Club").await;

    let (status, _) = send(
        &app,
        "POST",
        "/activities/Chess%20Club/signup?email=flowtest@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        participants(&app, "Chess Club")
            .await
            .contains(&"flowtest@mergington.edu".to_string())
    );

    let (status, _) = send(
        &app,
        "DELETE",
        "/activities/Chess%20Club/signup?email=flowtest@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(participants(&app, "Chess Club").await, before);
}

#[tokio::test]
async fn should_sign_up_same_student_for_multiple_activities() {
    let app = app();
    let email = "versatile@mergington.edu".to_string();

    for activity in ["Chess%20Club", "Basketball"] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/activities/{activity}/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    assert!(participants(&app, "Chess Club").await.contains(&email));
    assert!(participants(&app, "Basketball").await.contains(&email));

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/activities/Chess%20Club/signup?email={email}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!participants(&app, "Chess Club").await.contains(&email));
    assert!(participants(&app, "Basketball").await.contains(&email));
}

#[tokio::test]
async fn should_isolate_state_between_app_instances() {
    let first = app();
    let (status, _) = send(
        &first,
        "POST",
        "/activities/Math%20Club/signup?email=isolated@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let second = app();
    assert!(
        !participants(&second, "Math Club")
            .await
            .contains(&"isolated@mergington.edu".to_string())
    );
}
