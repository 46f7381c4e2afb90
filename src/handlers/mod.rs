mod dashboard;
mod devices;

pub use dashboard::*;
pub use devices::*;

use axum::{
    Json, Router,
    routing::{delete, get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::store::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/devices", get(list_devices))
        .route("/devices", post(create_device))
        .route("/devices/{id}", delete(delete_device))
        .route("/dashboard/summary", get(dashboard_summary))
        .route("/dashboard/calendar", get(expiry_calendar))
        .route("/dashboard/alerts", get(alerts))
}

/// The full application: routes plus request tracing and CORS (the
/// frontend is served from a different origin during development).
pub fn app(state: AppState) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
