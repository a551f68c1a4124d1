use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::bucket::BucketKey;

/// A ping tagged with the visit session it belongs to.
/// Session ids are 1-based and monotonic within a device; they never reset.
#[derive(Debug, Clone)]
pub struct SessionPing {
    pub device_id: String,
    pub timestamp: NaiveDateTime,
    pub session_id: u32,
}

/// A reconstructed visit session: a maximal run of one device's pings with
/// no inactivity gap exceeding the configured threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub device_id: String,
    pub session_id: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl Session {
    /// Bucket of the session's start instant.
    pub fn bucket(&self) -> BucketKey {
        BucketKey::from_timestamp(&self.start)
    }
}

/// A qualifying session reduced to its dwell time, bucketed by the
/// day-of-week and hour of its start.
#[derive(Debug, Clone)]
pub struct SessionDwell {
    pub bucket: BucketKey,
    pub duration_minutes: i64,
}
