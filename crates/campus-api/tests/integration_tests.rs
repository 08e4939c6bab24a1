//! # Integration Tests for campus-api
//!
//! Drives the assembled router with `tower::ServiceExt::oneshot` over the
//! in-memory repository: campus CRUD, rosters, grouping, error bodies,
//! health probes, metrics and the OpenAPI document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use campus_api::state::AppState;
use campus_core::{seed_sample, Campus};

fn test_app() -> axum::Router {
    campus_api::app(AppState::new())
}

/// App over a seeded repository, plus the seeded campuses.
async fn seeded_app() -> (axum::Router, Vec<Campus>) {
    let state = AppState::new();
    let campuses = seed_sample(state.repo.as_ref()).await.unwrap();
    (campus_api::app(state), campuses)
}

async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ready");
}

// -- Campuses -----------------------------------------------------------------

#[tokio::test]
async fn test_list_campuses_empty() {
    let response = test_app().oneshot(get("/api/campuses")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_then_get_campus() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/campuses",
            json!({"name": "Mars", "description": "Red Planet", "imageUrl": "mars.png"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Mars");
    assert_eq!(created["description"], "Red Planet");
    assert_eq!(created["imageUrl"], "mars.png");
    assert!(created.get("address").is_none());
    let id = created["id"].as_i64().unwrap();

    let response = app.oneshot(get(&format!("/api/campuses/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_create_campus_without_name_is_rejected() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/campuses", json!({"address": "Olympus Mons"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "name");

    let response = app.oneshot(get("/api/campuses")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_create_campus_with_blank_name_is_rejected() {
    let response = test_app()
        .oneshot(post_json("/api/campuses", json!({"name": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["details"]["field"], "name");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/campuses")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_unknown_campus_is_not_found() {
    let response = test_app().oneshot(get("/api/campuses/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().unwrap().contains("campus:42"));
}

#[tokio::test]
async fn test_non_numeric_campus_id_is_bad_request() {
    let response = test_app().oneshot(get("/api/campuses/mars")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// -- Students -----------------------------------------------------------------

#[tokio::test]
async fn test_roster_lists_only_that_campus() {
    let (app, campuses) = seeded_app().await;
    let hopper = campuses[0].id.get();

    let response = app
        .oneshot(get(&format!("/api/campuses/{hopper}/students")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let roster = body_json(response).await;
    let names: Vec<&str> = roster
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Terry Witz", "Yuval Ivana"]);
    assert_eq!(roster[0]["phase"], "junior");
    assert_eq!(roster[0]["campusId"], hopper);
}

#[tokio::test]
async fn test_roster_of_unknown_campus_is_not_found() {
    let response = test_app()
        .oneshot(get("/api/campuses/9/students"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enroll_student() {
    let (app, campuses) = seeded_app().await;
    let flex = campuses[1].id.get();

    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/campuses/{flex}/students"),
            json!({"name": "Ada Lovelace", "email": "ada@example.com", "phase": "senior"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let student = body_json(response).await;
    assert_eq!(student["campusId"], flex);
    assert_eq!(student["phase"], "senior");

    let response = app
        .oneshot(get(&format!("/api/campuses/{flex}/students")))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_enroll_student_without_phase() {
    let (app, campuses) = seeded_app().await;
    let response = app
        .oneshot(post_json(
            &format!("/api/campuses/{}/students", campuses[0].id.get()),
            json!({"name": "Grace"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["phase"], Value::Null);
}

#[tokio::test]
async fn test_enroll_student_with_bad_phase_is_rejected() {
    let (app, campuses) = seeded_app().await;
    let response = app
        .oneshot(post_json(
            &format!("/api/campuses/{}/students", campuses[0].id.get()),
            json!({"name": "Grace", "phase": "sophomore"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "phase");
}

#[tokio::test]
async fn test_enroll_student_without_name_is_rejected() {
    let (app, campuses) = seeded_app().await;
    let response = app
        .oneshot(post_json(
            &format!("/api/campuses/{}/students", campuses[0].id.get()),
            json!({"phase": "junior"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["details"]["field"], "name");
}

#[tokio::test]
async fn test_enroll_at_unknown_campus_is_not_found() {
    let response = test_app()
        .oneshot(post_json("/api/campuses/5/students", json!({"name": "Grace"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Groups -------------------------------------------------------------------

#[tokio::test]
async fn test_groups_partition_roster_in_order() {
    let (app, campuses) = seeded_app().await;
    let hopper = campuses[0].id.get();

    let response = app
        .oneshot(get(&format!("/api/campuses/{hopper}/groups?size=1")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let groups = body_json(response).await;
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0][0]["name"], "Terry Witz");
    assert_eq!(groups[1][0]["name"], "Yuval Ivana");
}

#[tokio::test]
async fn test_groups_larger_than_roster_is_single_group() {
    let (app, campuses) = seeded_app().await;
    let response = app
        .oneshot(get(&format!("/api/campuses/{}/groups?size=10", campuses[0].id.get())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let groups = body_json(response).await;
    assert_eq!(groups.as_array().unwrap().len(), 1);
    assert_eq!(groups[0].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_groups_of_empty_roster_is_empty() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(post_json("/api/campuses", json!({"name": "Pluto"})))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = app
        .oneshot(get(&format!("/api/campuses/{id}/groups?size=3")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn test_groups_reject_non_positive_size() {
    let (app, campuses) = seeded_app().await;
    let id = campuses[0].id.get();

    for size in ["0", "-2"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/api/campuses/{id}/groups?size={size}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "size={size}");
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid argument"));
    }
}

#[tokio::test]
async fn test_groups_reject_missing_or_fractional_size() {
    let (app, campuses) = seeded_app().await;
    let id = campuses[0].id.get();

    for query in ["", "?size=1.5", "?size=two"] {
        let response = app
            .clone()
            .oneshot(get(&format!("/api/campuses/{id}/groups{query}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "query={query}");
    }
}

#[tokio::test]
async fn test_groups_of_unknown_campus_is_not_found() {
    let response = test_app()
        .oneshot(get("/api/campuses/77/groups?size=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// -- Metrics and OpenAPI ------------------------------------------------------

#[tokio::test]
async fn test_metrics_count_responses() {
    let app = test_app();
    app.clone().oneshot(get("/api/campuses")).await.unwrap();
    app.clone().oneshot(get("/api/campuses/1")).await.unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["requests"].as_u64().unwrap() >= 2);
    assert!(body["clientErrors"].as_u64().unwrap() >= 1);
    assert_eq!(body["serverErrors"], 0);
}

#[tokio::test]
async fn test_openapi_document() {
    let response = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["openapi"].as_str().unwrap().starts_with("3."));
    assert!(doc["paths"]["/api/campuses/{id}/groups"]["get"].is_object());
    assert!(doc["components"]["schemas"]["Campus"].is_object());
}
