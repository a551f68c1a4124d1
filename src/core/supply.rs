//! Supply side: expected per-customer service time per bucket.

use crate::models::bucket::BucketKey;
use crate::models::session::SessionDwell;
use std::collections::BTreeMap;

/// Arithmetic mean of dwell minutes per (day_of_week, hour) bucket.
///
/// Buckets with no qualifying sessions are absent from the map: "no data"
/// is not the same as a zero service time, which would imply infinite
/// register throughput downstream.
pub fn average_dwell(dwells: &[SessionDwell]) -> BTreeMap<BucketKey, f64> {
    let mut sums: BTreeMap<BucketKey, (i64, i64)> = BTreeMap::new();

    for d in dwells {
        let entry = sums.entry(d.bucket).or_insert((0, 0));
        entry.0 += d.duration_minutes;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(bucket, (total, count))| (bucket, total as f64 / count as f64))
        .collect()
}
