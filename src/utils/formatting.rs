//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Average process time with one decimal, e.g. "5.0".
pub fn fmt_avg_minutes(avg: f64) -> String {
    format!("{:.1}", avg)
}

/// Signed staffing gap: "+2", "-3", "0".
pub fn fmt_gap(gap: i64) -> String {
    if gap > 0 {
        format!("+{}", gap)
    } else {
        gap.to_string()
    }
}

/// Hour bucket label, e.g. "09:00".
pub fn fmt_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Timestamp cell for table output.
pub fn format_timestamp_cell(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
