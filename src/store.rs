//! In-memory device store. State lives for the lifetime of the process;
//! there is no persistence layer.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::Device;

pub fn gen_id() -> String {
    Uuid::new_v4().to_string()
}

/// Ordered collection of device records. Insertion order is display order;
/// the only mutations are append and remove-by-id.
#[derive(Debug, Default)]
pub struct DeviceStore {
    devices: Vec<Device>,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a device. The caller assigns the id (via [`gen_id`]).
    pub fn add(&mut self, device: Device) {
        self.devices.push(device);
    }

    /// Remove the device with the given id. Returns whether a record was
    /// removed; an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.devices.len();
        self.devices.retain(|d| d.id != id);
        self.devices.len() < before
    }

    pub fn get(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn all(&self) -> &[Device] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Populate the store with the demo catalog (dev mode only), so a
    /// freshly started frontend has something to render.
    pub fn seed_demo(&mut self) {
        for (object, name, number, verified, period) in [
            ("Workshop 1", "Pressure gauge MP-3U", "MP-00142", (2025, 6, 15), 12),
            ("Laboratory", "Thermometer TL-4", "TL-00891", (2025, 12, 1), 24),
            ("Warehouse", "Scales VL-120", "VL-00567", (2026, 2, 20), 12),
            ("Workshop 2", "Ammeter E378", "E3-01234", (2026, 4, 10), 12),
        ] {
            let (y, m, d) = verified;
            let verification_date = NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");
            self.add(Device {
                id: gen_id(),
                object: object.to_string(),
                name: name.to_string(),
                number: number.to_string(),
                verification_date,
                verification_period_months: period,
            });
        }
    }
}

/// Shared application state handed to the router. The lock exists to meet
/// axum's `Send + Sync` bounds; all mutation happens through the two store
/// operations and is synchronous.
#[derive(Clone, Default)]
pub struct AppState {
    pub devices: Arc<RwLock<DeviceStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: DeviceStore) -> Self {
        Self {
            devices: Arc::new(RwLock::new(store)),
        }
    }
}
