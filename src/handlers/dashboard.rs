use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::store::AppState;
use crate::views::{self, CalendarBuckets, DeviceWithStatus, StatusSummary};

pub async fn dashboard_summary(State(state): State<AppState>) -> Result<Json<StatusSummary>> {
    let store = state.devices.read()?;
    let today = Utc::now().date_naive();
    Ok(Json(views::status_summary(store.all(), today)))
}

pub async fn expiry_calendar(State(state): State<AppState>) -> Result<Json<CalendarBuckets>> {
    let store = state.devices.read()?;
    let today = Utc::now().date_naive();
    Ok(Json(views::calendar_buckets(store.all(), today)))
}

#[derive(Debug, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<DeviceWithStatus>,
}

/// Expired and expiring-soon devices, most urgent first.
pub async fn alerts(State(state): State<AppState>) -> Result<Json<AlertsResponse>> {
    let store = state.devices.read()?;
    let today = Utc::now().date_naive();
    Ok(Json(AlertsResponse {
        alerts: views::alert_feed(store.all(), today),
    }))
}
