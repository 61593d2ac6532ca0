//! JSON API under `/api/v1` plus the system endpoints.

#![allow(clippy::expect_used, clippy::panic)]

mod common;

use common::{TestApp, assert_close, spawn_app};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn post_json(app: &TestApp, path: &str, body: Value) -> reqwest::Response {
    tokio_test::assert_ok!(app.client.post(app.url(path)).json(&body).send().await)
}

async fn put_json(app: &TestApp, path: &str, body: Value) -> reqwest::Response {
    tokio_test::assert_ok!(app.client.put(app.url(path)).json(&body).send().await)
}

async fn json_body(resp: reqwest::Response) -> Value {
    tokio_test::assert_ok!(resp.json::<Value>().await)
}

async fn create(app: &TestApp, name: &str, capacity: Value, balance: Value) -> reqwest::Response {
    post_json(
        app,
        "/api/v1/warehouses",
        json!({ "name": name, "capacity": capacity, "initial_balance": balance }),
    )
    .await
}

#[tokio::test]
async fn create_returns_created_warehouse() {
    let app = spawn_app().await;
    let resp = create(&app, "Main", json!(10), json!(3)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Main");
    assert_eq!(body["capacity"], 10.0);
    assert_eq!(body["balance"], 3.0);
    assert_eq!(body["available_space"], 7.0);
    assert_eq!(body["summary"], "level = 3, remaining capacity 7");
}

#[tokio::test]
async fn create_accepts_string_numbers_and_defaults_balance() {
    let app = spawn_app().await;
    let resp = post_json(
        &app,
        "/api/v1/warehouses",
        json!({ "name": "Strings", "capacity": " 12.5 " }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["capacity"], 12.5);
    assert_eq!(body["balance"], 0.0);
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let app = spawn_app().await;

    let resp = create(&app, "Main", json!("lots"), json!(0)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], 1001);

    let resp = create(&app, "   ", json!(10), json!(0)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], 1003);

    create(&app, "Main", json!(10), json!(0)).await;
    let resp = create(&app, "Main", json!(99), json!(0)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], 2002);
}

#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let app = spawn_app().await;
    let resp = tokio_test::assert_ok!(
        app.client
            .post(app.url("/api/v1/warehouses"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
    );
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"]["code"], 1002);

    let resp = post_json(&app, "/api/v1/warehouses", json!({ "capacity": 5 })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["error"]["code"], 1002);
}

#[tokio::test]
async fn list_keeps_creation_order() {
    let app = spawn_app().await;
    for name in ["Zeta", "Alpha", "Mid"] {
        create(&app, name, json!(1), json!(0)).await;
    }
    let body = json_body(app.get("/api/v1/warehouses").await).await;
    assert_eq!(body["total"], 3);
    let names: Vec<&str> = body["data"]
        .as_array()
        .map(|items| items.iter().filter_map(|w| w["name"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[tokio::test]
async fn get_and_delete() {
    let app = spawn_app().await;
    create(&app, "Main Hall", json!(5), json!(5)).await;

    let resp = app.get("/api/v1/warehouses/Main%20Hall").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["balance"], 5.0);

    let resp = tokio_test::assert_ok!(
        app.client
            .delete(app.url("/api/v1/warehouses/Main%20Hall"))
            .send()
            .await
    );
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.get("/api/v1/warehouses/Main%20Hall").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"]["code"], 2001);
}

#[tokio::test]
async fn names_are_case_sensitive() {
    let app = spawn_app().await;
    create(&app, "Main", json!(5), json!(0)).await;
    let resp = app.get("/api/v1/warehouses/main").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = create(&app, "main", json!(5), json!(0)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn deposit_reports_accepted_and_discarded() {
    let app = spawn_app().await;
    create(&app, "Main", json!(10), json!(8)).await;

    let resp = post_json(&app, "/api/v1/warehouses/Main/deposit", json!({ "amount": 5 })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["accepted"], 2.0);
    assert_eq!(body["discarded"], 3.0);
    assert_eq!(body["warehouse"]["balance"], 10.0);

    // Negative amounts are ignored, not rejected.
    let resp = post_json(&app, "/api/v1/warehouses/Main/deposit", json!({ "amount": -4 })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["accepted"], 0.0);
    assert_eq!(body["warehouse"]["balance"], 10.0);
}

#[tokio::test]
async fn withdraw_reports_removed() {
    let app = spawn_app().await;
    create(&app, "Main", json!(10), json!(4)).await;

    let resp = post_json(&app, "/api/v1/warehouses/Main/withdraw", json!({ "amount": "3" })).await;
    let body = json_body(resp).await;
    assert_eq!(body["removed"], 3.0);
    assert_eq!(body["warehouse"]["balance"], 1.0);

    let resp = post_json(&app, "/api/v1/warehouses/Main/withdraw", json!({ "amount": 50 })).await;
    let body = json_body(resp).await;
    assert_eq!(body["removed"], 1.0);
    assert_eq!(body["warehouse"]["balance"], 0.0);

    let resp = post_json(&app, "/api/v1/warehouses/Main/withdraw", json!({ "amount": "abc" })).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn resize_truncates_balance() {
    let app = spawn_app().await;
    create(&app, "Main", json!(10), json!(8)).await;

    let resp = put_json(&app, "/api/v1/warehouses/Main/capacity", json!({ "capacity": 5 })).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["capacity"], 5.0);
    assert_eq!(body["balance"], 5.0);

    let resp = put_json(&app, "/api/v1/warehouses/Main/capacity", json!({ "capacity": -1 })).await;
    let body = json_body(resp).await;
    assert_eq!(body["capacity"], 0.0);
    assert_eq!(body["balance"], 0.0);

    let resp = put_json(&app, "/api/v1/warehouses/Ghost/capacity", json!({ "capacity": 1 })).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_filters_by_substring() {
    let app = spawn_app().await;
    create(&app, "Main Depot", json!(1), json!(0)).await;
    create(&app, "Annex", json!(1), json!(0)).await;

    let body = json_body(app.get("/api/v1/search?q=DEP").await).await;
    assert_eq!(body["query"], "DEP");
    assert_eq!(body["results"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["results"][0]["name"], "Main Depot");

    let body = json_body(app.get("/api/v1/search?q=%20%20").await).await;
    assert!(body["query"].is_null());
    assert_eq!(body["results"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn health_counts_warehouses() {
    let app = spawn_app().await;
    create(&app, "Main", json!(1), json!(0)).await;
    let resp = app.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["warehouse_count"], 1);
}

#[tokio::test]
async fn admin_reset_clears_registry() {
    let app = spawn_app().await;
    create(&app, "One", json!(1), json!(0)).await;
    create(&app, "Two", json!(1), json!(0)).await;

    let resp = tokio_test::assert_ok!(app.client.post(app.url("/admin/reset")).send().await);
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(app.state.warehouse_service.list_warehouses().await.is_empty());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;
    let resp = app.get("/api-docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/api/v1/warehouses"].is_object());
    assert!(body["paths"]["/api/v1/warehouses/{name}/deposit"].is_object());
}

#[tokio::test]
async fn fractional_amounts_are_kept() {
    let app = spawn_app().await;
    create(&app, "Tank", json!(1.5), json!(0.25)).await;
    post_json(&app, "/api/v1/warehouses/Tank/deposit", json!({ "amount": 0.5 })).await;
    let (capacity, balance) = app.pool("Tank").await;
    assert_close(capacity, 1.5);
    assert_close(balance, 0.75);
}

#[tokio::test]
async fn middleware_stack_answers_cors_requests() {
    let app = spawn_app().await;
    let resp = tokio_test::assert_ok!(
        app.client
            .get(app.url("/health"))
            .header("origin", "http://example.test")
            .send()
            .await
    );
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
