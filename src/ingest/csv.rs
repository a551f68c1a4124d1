//! CSV readers for the two input tables.
//!
//! Rows with an unparsable or absent timestamp (or blank key fields) are
//! rejected here, before any downstream stage sees them. The rejected count
//! is returned to the caller, which reports it as a warning rather than a
//! hard failure.

use crate::errors::{AppError, AppResult};
use crate::ingest::model::{RawPingRecord, RawSaleRecord};
use crate::models::ping::LocationPing;
use crate::models::sale::SaleRecord;
use crate::utils::time::parse_timestamp;
use std::path::Path;

/// Read a pings CSV (`device_id,timestamp,area,role`).
/// Returns the accepted pings and the number of rejected rows.
pub fn read_pings(path: &Path) -> AppResult<(Vec<LocationPing>, usize)> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;

    let mut out = Vec::new();
    let mut rejected = 0usize;

    for record in rdr.deserialize::<RawPingRecord>() {
        let raw = match record {
            Ok(r) => r,
            Err(_) => {
                rejected += 1;
                continue;
            }
        };

        if raw.device_id.trim().is_empty() {
            rejected += 1;
            continue;
        }

        match parse_timestamp(&raw.timestamp) {
            Some(ts) => out.push(LocationPing::new(
                raw.device_id.trim(),
                ts,
                raw.area.trim(),
                raw.role.trim(),
            )),
            None => rejected += 1,
        }
    }

    Ok((out, rejected))
}

/// Read a sales CSV (`sale_id,timestamp`).
/// Returns the accepted sales and the number of rejected rows.
pub fn read_sales(path: &Path) -> AppResult<(Vec<SaleRecord>, usize)> {
    let mut rdr = csv::Reader::from_path(path)
        .map_err(|e| AppError::Import(format!("{}: {}", path.display(), e)))?;

    let mut out = Vec::new();
    let mut rejected = 0usize;

    for record in rdr.deserialize::<RawSaleRecord>() {
        let raw = match record {
            Ok(r) => r,
            Err(_) => {
                rejected += 1;
                continue;
            }
        };

        if raw.sale_id.trim().is_empty() {
            rejected += 1;
            continue;
        }

        match parse_timestamp(&raw.timestamp) {
            Some(ts) => out.push(SaleRecord::new(raw.sale_id.trim(), ts)),
            None => rejected += 1,
        }
    }

    Ok((out, rejected))
}
