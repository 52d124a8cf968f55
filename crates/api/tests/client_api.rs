//! Integration tests for the `/clients` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_project, delete, get, post, put};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_get_client(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app.clone(),
        "/api/v1/clients",
        json!({ "name": "Budi", "email": "budi@x.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();
    // Absent phone is stored as an empty string.
    assert_eq!(json["data"]["phone"], "");

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Budi");
    assert_eq!(json["data"]["email"], "budi@x.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_requires_name_and_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app.clone(),
        "/api/v1/clients",
        json!({ "name": "", "email": "budi@x.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post(app, "/api/v1/clients", json!({ "name": "Budi", "email": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_is_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);

    for name in ["First", "Second", "Third"] {
        let response = post(
            app.clone(),
            "/api/v1/clients",
            json!({ "name": name, "email": format!("{name}@x.com") }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app, "/api/v1/clients").await;
    let json = body_json(response).await;
    let clients = json["data"].as_array().unwrap();
    assert_eq!(clients.len(), 3);
    let names: Vec<_> = clients.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_applies_partial_fields(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post(
        app.clone(),
        "/api/v1/clients",
        json!({ "name": "Budi", "email": "budi@x.com", "phone": "0812" }),
    )
    .await;
    let json = body_json(response).await;
    let id = json["data"]["id"].as_i64().unwrap();

    let response = put(
        app.clone(),
        &format!("/api/v1/clients/{id}"),
        json!({ "phone": "0857" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["phone"], "0857");
    // Untouched fields survive.
    assert_eq!(json["data"]["name"], "Budi");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_client_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put(app, "/api/v1/clients/9999", json!({ "name": "X" })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_cascades_to_all_projects(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (project_id, client_id) = create_project(app.clone(), "Logo", 100, 0).await;

    let response = delete(app.clone(), &format!("/api/v1/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.clone(), &format!("/api/v1/projects/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, &format!("/api/v1/clients/{client_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_missing_client_is_acked(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/clients/9999").await;
    // The end state already holds; this is an ack, not an error.
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
