#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use jobmanager_api::config::ServerConfig;
use jobmanager_api::router::build_app_router;
use jobmanager_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and known admin
/// credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        admin_username: "admin".to_string(),
        admin_password: "rahasia".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a request with an optional JSON body and return the raw response.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project (with its embedded client) through the API and return
/// `(project_id, client_id)`.
pub async fn create_project(app: Router, title: &str, total_bill: i64, paid_amount: i64) -> (i64, i64) {
    let response = post(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": title,
            "status": "ongoing",
            "deadline": "2025-01-01",
            "paid": "belum lunas",
            "paymentMethod": "cash",
            "totalBill": total_bill,
            "paidAmount": paid_amount,
            "client": { "name": "Budi", "email": "budi@x.com" },
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["data"]["projectId"].as_i64().unwrap(),
        json["data"]["clientId"].as_i64().unwrap(),
    )
}
