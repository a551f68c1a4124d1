//! Session reconstruction: turn an unordered stream of per-device pings
//! into discrete visit sessions using an inactivity-gap threshold.

use crate::models::ping::LocationPing;
use crate::models::session::SessionPing;
use crate::utils::time::seconds_between;
use std::collections::BTreeMap;

/// Tag every ping with the visit session it belongs to.
///
/// Pings are grouped by device and sorted chronologically within each group
/// (stable, so equal timestamps keep their arrival order). A ping opens a
/// new session when it is the device's first ping, or when its gap from the
/// immediately preceding ping strictly exceeds `gap_minutes`. Session ids
/// start at 1 and only ever grow within a device.
///
/// Output order is deterministic for identical input: devices ascending,
/// pings chronological within each device.
pub fn tag_sessions(pings: &[LocationPing], gap_minutes: i64) -> Vec<SessionPing> {
    // BTreeMap keeps device iteration order stable across runs.
    let mut by_device: BTreeMap<&str, Vec<&LocationPing>> = BTreeMap::new();
    for p in pings {
        by_device.entry(p.device_id.as_str()).or_default().push(p);
    }

    let mut out = Vec::with_capacity(pings.len());

    for (device_id, mut device_pings) in by_device {
        // Stable sort: ties stay in arrival order.
        device_pings.sort_by_key(|p| p.timestamp);

        let mut session_id: u32 = 0;
        let mut last_seen = None;

        for p in device_pings {
            let new_session = match last_seen {
                None => true,
                Some(prev) => seconds_between(prev, p.timestamp) > gap_minutes * 60,
            };

            if new_session {
                session_id += 1;
            }

            out.push(SessionPing {
                device_id: device_id.to_string(),
                timestamp: p.timestamp,
                session_id,
            });

            last_seen = Some(p.timestamp);
        }
    }

    out
}
