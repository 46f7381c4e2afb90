use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Verification state of a device, derived from its days remaining.
/// Presentation (badge colors, wording) lives entirely in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceStatus {
    Active,
    ExpiringSoon,
    Expired,
}

/// A measurement device under calibration tracking.
///
/// Expiry date, days remaining, and status are never stored; they are
/// recomputed from the wall clock on every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    /// Location/owner label ("Workshop 1", "Laboratory", ...)
    pub object: String,
    pub name: String,
    /// Serial/inventory number
    pub number: String,
    pub verification_date: NaiveDate,
    pub verification_period_months: u32,
}

/// Add-device submission. Field values arrive as the form sends them:
/// free text, a `YYYY-MM-DD` date string, and the period as the string
/// form of a positive integer (the form pre-fills "12"). Everything
/// defaults so that a missing field validates the same as an empty one.
#[derive(Debug, Deserialize)]
pub struct CreateDevice {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub verification_date: String,
    #[serde(default = "default_period")]
    pub verification_period_months: String,
}

fn default_period() -> String {
    "12".to_string()
}
