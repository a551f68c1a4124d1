use chrono::{Datelike, NaiveDateTime, Timelike};

/// Aggregation key aligning supply, demand and actual-staffing facts:
/// ISO weekday number (1 = Monday … 7 = Sunday) plus hour of day (0–23).
///
/// The `Ord` derive gives (day_of_week, hour) ascending, which is the final
/// report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    pub day_of_week: u32,
    pub hour: u32,
}

impl BucketKey {
    pub fn from_timestamp(ts: &NaiveDateTime) -> Self {
        Self {
            day_of_week: ts.weekday().number_from_monday(),
            hour: ts.hour(),
        }
    }

    pub fn day_name(&self) -> &'static str {
        match self.day_of_week {
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            7 => "Sunday",
            _ => "Unknown",
        }
    }
}
