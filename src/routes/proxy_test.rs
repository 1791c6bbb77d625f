use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};

use super::*;
use crate::config::ServerConfig;

#[test]
fn upstream_url_joins_path_and_query() {
    assert_eq!(upstream_url("http://up/api/", "vehicles", None), "http://up/api/vehicles");
    assert_eq!(upstream_url("http://up/api", "/vehicles/3", Some("")), "http://up/api/vehicles/3");
    assert_eq!(upstream_url("http://up/api", "vehicles", Some("model=vf7")), "http://up/api/vehicles?model=vf7");
}

#[test]
fn forwarded_headers_keeps_only_allowed() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::COOKIE, HeaderValue::from_static("session=1"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    assert!(out.get(header::COOKIE).is_none());
}

#[test]
fn error_body_matches_service_envelope() {
    assert_eq!(error_body("down"), serde_json::json!({ "success": false, "message": "down" }));
}

// =============================================================
// End to end against a local upstream
// =============================================================

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(upstream_api: String) -> AppState {
    let config = ServerConfig { port: 0, upstream_api, upstream_timeout: Duration::from_secs(5) };
    AppState::new(&config).unwrap()
}

#[tokio::test]
async fn forward_relays_get_with_query() {
    let upstream = Router::new().route(
        "/api/vehicles",
        get(|RawQuery(query): RawQuery| async move {
            Json(serde_json::json!({ "success": true, "data": [], "message": query }))
        }),
    );
    let upstream_base = spawn(upstream).await;
    let proxy = spawn(crate::routes::api_routes(state_for(format!("{upstream_base}/api")))).await;

    let response = reqwest::get(format!("{proxy}/api/vehicles?model=vf7")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "model=vf7");
}

#[tokio::test]
async fn forward_relays_post_body_auth_and_status() {
    let upstream = Router::new().route(
        "/api/appointments",
        post(|headers: HeaderMap, body: Bytes| async move {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            let echoed: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "success": false, "message": auth, "data": echoed })),
            )
        }),
    );
    let upstream_base = spawn(upstream).await;
    let proxy = spawn(crate::routes::api_routes(state_for(format!("{upstream_base}/api")))).await;

    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/appointments"))
        .bearer_auth("tok")
        .json(&serde_json::json!({ "vehicleId": 3 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Bearer tok");
    assert_eq!(body["data"]["vehicleId"], 3);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_envelope() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);
    let proxy = spawn(crate::routes::api_routes(state_for(format!("http://{dead}/api")))).await;

    let response = reqwest::get(format!("{proxy}/api/vehicles")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("upstream request failed"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = spawn(crate::routes::api_routes(state_for("http://127.0.0.1:9/api".to_owned()))).await;
    let response = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
