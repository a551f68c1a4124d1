//! Actual staffing observation and the final required-vs-actual join.

use crate::errors::{AppError, AppResult};
use crate::models::bucket::BucketKey;
use crate::models::ping::LocationPing;
use crate::models::report::StaffingGapRow;
use std::collections::{BTreeMap, BTreeSet};

/// Count distinct cashier devices observed per bucket.
///
/// `register_area` restricts the count to pings from the register zone
/// (the strict variant); `None` counts a cashier anywhere on the floor.
pub fn count_open_registers(
    pings: &[LocationPing],
    cashier_role: &str,
    register_area: Option<&str>,
) -> BTreeMap<BucketKey, i64> {
    let mut devices: BTreeMap<BucketKey, BTreeSet<&str>> = BTreeMap::new();

    for p in pings {
        if p.role != cashier_role {
            continue;
        }
        if let Some(area) = register_area
            && p.area != area
        {
            continue;
        }

        devices
            .entry(BucketKey::from_timestamp(&p.timestamp))
            .or_default()
            .insert(p.device_id.as_str());
    }

    devices
        .into_iter()
        .map(|(bucket, set)| (bucket, set.len() as i64))
        .collect()
}

/// Join supply, demand and actual staffing into the final report rows.
///
/// The demand side conceptually covers every bucket (a bucket with no sales
/// has demand 0); the join is inner on supply (a bucket without a service
/// time estimate is dropped, since no staffing requirement can be computed)
/// and left on actual staffing (absent means 0 registers open). Iterating
/// the supply map realizes exactly that set, already in (day, hour) order.
pub fn build_gap_rows(
    supply: &BTreeMap<BucketKey, f64>,
    demand: &BTreeMap<BucketKey, i64>,
    actual: &BTreeMap<BucketKey, i64>,
) -> AppResult<Vec<StaffingGapRow>> {
    let mut rows = Vec::with_capacity(supply.len());

    for (bucket, &avg_process_time) in supply {
        // Structurally impossible given the minimum-duration filter, but a
        // zero here would turn into an infinite throughput below.
        if avg_process_time <= 0.0 {
            return Err(AppError::DataIntegrity(format!(
                "non-positive average process time ({avg_process_time}) for day {} hour {}",
                bucket.day_of_week, bucket.hour
            )));
        }

        let customers_demand = demand.get(bucket).copied().unwrap_or(0);
        let actual_registers_open = actual.get(bucket).copied().unwrap_or(0);

        // Registers needed so that hourly throughput per register
        // (60 / avg minutes) covers the demand.
        let per_register_per_hour = 60.0 / avg_process_time;
        let optimal_registers_needed =
            (customers_demand as f64 / per_register_per_hour).ceil() as i64;

        rows.push(StaffingGapRow {
            day_of_week: bucket.day_of_week,
            day_name: bucket.day_name().to_string(),
            hour: bucket.hour,
            customers_demand,
            avg_process_time,
            optimal_registers_needed,
            actual_registers_open,
            staffing_gap: actual_registers_open - optimal_registers_needed,
        });
    }

    Ok(rows)
}
