use chrono::NaiveDateTime;
use serde::Serialize;

/// A single device location ping, as supplied by the tracking system.
///
/// `area` and `role` stay plain strings: the zone and role vocabulary is
/// site-specific and configured (`register_area`, `customer_role`,
/// `cashier_role`), not a closed set.
#[derive(Debug, Clone, Serialize)]
pub struct LocationPing {
    pub device_id: String,
    pub timestamp: NaiveDateTime, // ⇔ pings.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub area: String,             // ⇔ pings.area (e.g. "CASH_REGISTERS")
    pub role: String,             // ⇔ pings.role (staff role or customer category)
}

impl LocationPing {
    pub fn new(device_id: &str, timestamp: NaiveDateTime, area: &str, role: &str) -> Self {
        Self {
            device_id: device_id.to_string(),
            timestamp,
            area: area.to_string(),
            role: role.to_string(),
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
