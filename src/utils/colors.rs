/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Staffing gap color:
/// \>0 → green (overstaffed)
/// \<0 → red (understaffed)
/// 0 → reset
pub fn color_for_gap(value: i64) -> &'static str {
    if value > 0 {
        GREEN
    } else if value < 0 {
        RED
    } else {
        RESET
    }
}

/// GREY for empty-looking values, RESET otherwise.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty()
        || value.trim() == "--"
        || value.trim() == "0"
        || value.trim() == "00:00"
    {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
