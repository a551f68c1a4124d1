//! Reduce session-tagged pings to per-session dwell times.

use crate::models::session::{Session, SessionDwell, SessionPing};
use crate::utils::time::minutes_between;

/// Collapse tagged pings into one `Session` row per (device, session_id):
/// start = earliest ping, end = latest ping, duration in whole minutes.
///
/// Relies on `tag_sessions` output being grouped by device with session ids
/// ascending, so a single linear scan suffices.
pub fn collect_sessions(tagged: &[SessionPing]) -> Vec<Session> {
    let mut out: Vec<Session> = Vec::new();

    for sp in tagged {
        let extends = out
            .last()
            .is_some_and(|cur| cur.device_id == sp.device_id && cur.session_id == sp.session_id);

        if extends {
            if let Some(cur) = out.last_mut() {
                if sp.timestamp < cur.start {
                    cur.start = sp.timestamp;
                }
                if sp.timestamp > cur.end {
                    cur.end = sp.timestamp;
                }
                cur.duration_minutes = minutes_between(cur.start, cur.end);
            }
        } else {
            out.push(Session {
                device_id: sp.device_id.clone(),
                session_id: sp.session_id,
                start: sp.timestamp,
                end: sp.timestamp,
                duration_minutes: 0,
            });
        }
    }

    out
}

/// Keep only sessions long enough to represent a genuine checkout visit and
/// reduce each to its dwell time, bucketed by the session start.
///
/// A single ping or two near-simultaneous pings yield a near-zero duration
/// and are dropped here, never reaching the supply estimate.
pub fn qualifying_dwells(sessions: &[Session], min_minutes: i64) -> Vec<SessionDwell> {
    sessions
        .iter()
        .filter(|s| s.duration_minutes >= min_minutes)
        .map(|s| SessionDwell {
            bucket: s.bucket(),
            duration_minutes: s.duration_minutes,
        })
        .collect()
}
