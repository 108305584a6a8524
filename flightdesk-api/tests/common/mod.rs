#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use flightdesk_api::{app, AppState};
use flightdesk_core::FlightRepository;
use flightdesk_store::InMemoryFlightRepository;
use serde_json::Value;
use tower::ServiceExt;

/// Router backed by a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app_with(Arc::new(InMemoryFlightRepository::new()))
}

pub fn build_app_with(flights: Arc<dyn FlightRepository>) -> Router {
    app(AppState::new(flights))
}

/// Sends one request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Creates a flight and returns its id.
pub async fn create(app: &Router, from: &str, to: &str) -> i64 {
    let body = serde_json::json!({ "destination_from": from, "destination_to": to }).to_string();
    let (status, json) = post_json(app, "/flights", &body).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json["flight"]["flight_id"].as_i64().unwrap()
}

pub fn ids(flights: &Value) -> Vec<i64> {
    flights
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["flight_id"].as_i64().unwrap())
        .collect()
}
