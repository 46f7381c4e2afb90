//! Expiry derivation and status classification for verification records.

use chrono::{Months, NaiveDate};

use crate::models::{Device, DeviceStatus};

/// Devices expiring within this many days count as "expiring soon".
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Date the device's verification runs out: verification date advanced by
/// the verification period in calendar months (day-of-month clamped to the
/// shorter month, e.g. Jan 31 + 1 month = Feb 28).
pub fn expiry_date(device: &Device) -> NaiveDate {
    device
        .verification_date
        .checked_add_months(Months::new(device.verification_period_months))
        // only fails past chrono's year bound (~262143); clamp instead
        .unwrap_or(NaiveDate::MAX)
}

/// Signed count of whole calendar days from `today` to the device's expiry
/// date. Negative when overdue, zero when the verification expires today.
pub fn days_remaining(device: &Device, today: NaiveDate) -> i64 {
    (expiry_date(device) - today).num_days()
}

/// Classify a days-remaining value into the three-way device status.
pub fn classify(days_remaining: i64) -> DeviceStatus {
    if days_remaining < 0 {
        DeviceStatus::Expired
    } else if days_remaining <= EXPIRING_SOON_WINDOW_DAYS {
        DeviceStatus::ExpiringSoon
    } else {
        DeviceStatus::Active
    }
}

/// Convenience: classify a device directly against `today`.
pub fn status(device: &Device, today: NaiveDate) -> DeviceStatus {
    classify(days_remaining(device, today))
}
