//! Read-side projections of the device list: the searched catalog, the
//! summary counters, the calendar buckets, and the alert feed.
//!
//! All functions here are pure: they borrow the current device slice and
//! take `today` explicitly, and every derived value is recomputed on each
//! call (nothing is cached, so nothing can go stale).

use chrono::NaiveDate;
use serde::Serialize;

use crate::expiry::{self, EXPIRING_SOON_WINDOW_DAYS};
use crate::models::{Device, DeviceStatus};

/// A device record joined with its derived fields, as the frontend
/// consumes it.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceWithStatus {
    #[serde(flatten)]
    pub device: Device,
    pub expiry_date: NaiveDate,
    pub days_remaining: i64,
    pub status: DeviceStatus,
}

impl DeviceWithStatus {
    pub fn derive(device: &Device, today: NaiveDate) -> Self {
        let days_remaining = expiry::days_remaining(device, today);
        Self {
            device: device.clone(),
            expiry_date: expiry::expiry_date(device),
            days_remaining,
            status: expiry::classify(days_remaining),
        }
    }
}

/// Case-insensitive substring filter over `object`, `name`, and `number`.
/// A device matches if any of the three fields contains the query; the
/// empty query matches everything. Insertion order is preserved.
pub fn search<'a>(devices: &'a [Device], query: &str) -> Vec<&'a Device> {
    let q = query.to_lowercase();
    devices
        .iter()
        .filter(|d| {
            d.object.to_lowercase().contains(&q)
                || d.name.to_lowercase().contains(&q)
                || d.number.to_lowercase().contains(&q)
        })
        .collect()
}

/// Device counts per status, plus the total.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub active: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

/// Count devices per status, classifying each exactly once.
pub fn status_summary(devices: &[Device], today: NaiveDate) -> StatusSummary {
    let mut summary = StatusSummary {
        total: devices.len(),
        ..Default::default()
    };
    for device in devices {
        match expiry::status(device, today) {
            DeviceStatus::Active => summary.active += 1,
            DeviceStatus::ExpiringSoon => summary.expiring_soon += 1,
            DeviceStatus::Expired => summary.expired += 1,
        }
    }
    summary
}

/// Expiry dates partitioned by status, for highlighting calendar cells.
/// One entry per device; duplicate dates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarBuckets {
    pub active: Vec<NaiveDate>,
    pub expiring_soon: Vec<NaiveDate>,
    pub expired: Vec<NaiveDate>,
}

pub fn calendar_buckets(devices: &[Device], today: NaiveDate) -> CalendarBuckets {
    let mut buckets = CalendarBuckets::default();
    for device in devices {
        let expiry = expiry::expiry_date(device);
        match expiry::status(device, today) {
            DeviceStatus::Active => buckets.active.push(expiry),
            DeviceStatus::ExpiringSoon => buckets.expiring_soon.push(expiry),
            DeviceStatus::Expired => buckets.expired.push(expiry),
        }
    }
    buckets
}

/// Devices needing attention (expired or expiring within the 30-day
/// window), most urgent first: ascending by days remaining, so overdue
/// devices sort ahead of merely expiring ones. Ties keep insertion order.
pub fn alert_feed(devices: &[Device], today: NaiveDate) -> Vec<DeviceWithStatus> {
    let mut alerts: Vec<DeviceWithStatus> = devices
        .iter()
        .map(|d| DeviceWithStatus::derive(d, today))
        .filter(|d| d.days_remaining <= EXPIRING_SOON_WINDOW_DAYS)
        .collect();
    alerts.sort_by_key(|d| d.days_remaining);
    alerts
}
