//! Shared helpers for endpoint tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Months, NaiveDate, Utc};
use serde_json::Value;
use tower::ServiceExt;

use veritrack::handlers;
use veritrack::models::Device;
use veritrack::store::{AppState, DeviceStore, gen_id};

pub fn test_app(state: &AppState) -> Router {
    handlers::router().with_state(state.clone())
}

pub fn state_with(devices: Vec<Device>) -> AppState {
    let mut store = DeviceStore::new();
    for device in devices {
        store.add(device);
    }
    AppState::with_store(store)
}

pub fn make_device(
    object: &str,
    name: &str,
    number: &str,
    verification_date: NaiveDate,
    verification_period_months: u32,
) -> Device {
    Device {
        id: gen_id(),
        object: object.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        verification_date,
        verification_period_months,
    }
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Device whose 12-month verification expires `days` from the real today
/// (negative = already overdue).
pub fn device_expiring_in(days: i64, number: &str) -> Device {
    let verification_date =
        today().checked_sub_months(Months::new(12)).unwrap() + Duration::days(days);
    make_device("Workshop 1", "Pressure gauge MP-3U", number, verification_date, 12)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}
