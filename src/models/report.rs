use serde::Serialize;

/// One row of the final staffing-gap report.
///
/// `staffing_gap` is signed: positive means overstaffed, negative
/// understaffed, zero an exact match.
#[derive(Debug, Clone, Serialize)]
pub struct StaffingGapRow {
    pub day_of_week: u32,
    pub day_name: String,
    pub hour: u32,
    pub customers_demand: i64,
    pub avg_process_time: f64,
    pub optimal_registers_needed: i64,
    pub actual_registers_open: i64,
    pub staffing_gap: i64,
}
