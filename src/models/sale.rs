use chrono::NaiveDateTime;
use serde::Serialize;

/// A completed sale from the sales ledger. Only the timestamp matters for
/// demand estimation; the sale id is kept for auditing.
#[derive(Debug, Clone, Serialize)]
pub struct SaleRecord {
    pub sale_id: String,
    pub timestamp: NaiveDateTime, // ⇔ sales.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl SaleRecord {
    pub fn new(sale_id: &str, timestamp: NaiveDateTime) -> Self {
        Self {
            sale_id: sale_id.to_string(),
            timestamp,
        }
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
