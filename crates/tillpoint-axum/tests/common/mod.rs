//! Shared helpers for tillpoint-axum integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use tillpoint_axum::bootstrap::{AxumContext, CorsConfig};
use tillpoint_axum::routes::create_router;
use tillpoint_db::TestDb;

/// A router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = TestDb::new().await.expect("in-memory database");
    create_router(AxumContext::from_repos(db.repos()), &CorsConfig::AllowAll)
}

/// Send a request and return the status with the body parsed as JSON
/// (`Value::Null` for an empty or non-JSON body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Create a product and return its id.
pub async fn add_product(app: &Router, name: &str, price: &str) -> i64 {
    let (status, body) = post(
        app,
        "/api/products",
        serde_json::json!({ "name": name, "price": price }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "add product failed: {body}");
    body["id"].as_i64().unwrap()
}
