use serde::Deserialize;

/// Raw ping row as it appears in the CSV source, before validation.
/// Fields are plain strings; timestamp parsing happens at ingestion.
#[derive(Debug, Deserialize)]
pub struct RawPingRecord {
    pub device_id: String,
    pub timestamp: String,
    pub area: String,
    pub role: String,
}

/// Raw sale row as it appears in the CSV source.
#[derive(Debug, Deserialize)]
pub struct RawSaleRecord {
    pub sale_id: String,
    pub timestamp: String,
}
