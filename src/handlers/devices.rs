use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{CreateDevice, Device};
use crate::store::{AppState, gen_id};
use crate::views::{self, DeviceWithStatus};

#[derive(Debug, Deserialize)]
pub struct DevicesQuery {
    /// Free-text search; matched case-insensitively against object, name,
    /// and number. Empty or absent means the full catalog.
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct DevicesResponse {
    pub devices: Vec<DeviceWithStatus>,
    /// Unfiltered store size (the search only narrows the rows shown).
    pub total: usize,
}

pub async fn list_devices(
    State(state): State<AppState>,
    Query(query): Query<DevicesQuery>,
) -> Result<Json<DevicesResponse>> {
    let store = state.devices.read()?;
    let today = Utc::now().date_naive();

    let devices = views::search(store.all(), &query.q)
        .into_iter()
        .map(|d| DeviceWithStatus::derive(d, today))
        .collect();

    Ok(Json(DevicesResponse {
        devices,
        total: store.len(),
    }))
}

pub async fn create_device(
    State(state): State<AppState>,
    Json(request): Json<CreateDevice>,
) -> Result<Json<DeviceWithStatus>> {
    let device = validate_device(request)?;

    let mut store = state.devices.write()?;
    store.add(device.clone());
    tracing::info!(id = %device.id, name = %device.name, "device added");

    let today = Utc::now().date_naive();
    Ok(Json(DeviceWithStatus::derive(&device, today)))
}

/// Check an add-device submission and mint the stored record.
///
/// Object, name, number, and verification date must all be non-empty.
/// The period must
/// parse as a positive integer; anything else is rejected before it can
/// reach the store.
fn validate_device(request: CreateDevice) -> Result<Device> {
    for (field, value) in [
        ("object", &request.object),
        ("name", &request.name),
        ("number", &request.number),
        ("verification_date", &request.verification_date),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }

    let verification_date = NaiveDate::parse_from_str(request.verification_date.trim(), "%Y-%m-%d")
        .map_err(|_| {
            AppError::Validation("verification_date must be a date in YYYY-MM-DD form".into())
        })?;

    let verification_period_months: u32 = request
        .verification_period_months
        .trim()
        .parse()
        .ok()
        .filter(|months| *months >= 1)
        .ok_or_else(|| {
            AppError::Validation("verification_period_months must be a positive integer".into())
        })?;

    Ok(Device {
        id: gen_id(),
        object: request.object.trim().to_string(),
        name: request.name.trim().to_string(),
        number: request.number.trim().to_string(),
        verification_date,
        verification_period_months,
    })
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub remaining: usize,
}

/// Remove a device by id. Deleting an id that is not in the store is a
/// no-op, reported as `deleted: false`.
pub async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let mut store = state.devices.write()?;
    let deleted = store.remove(&id);
    if deleted {
        tracing::info!(%id, "device deleted");
    }

    Ok(Json(DeleteResponse {
        deleted,
        remaining: store.len(),
    }))
}
