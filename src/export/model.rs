use crate::models::report::StaffingGapRow;
use serde::Serialize;

/// Flat row for report export.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRowExport {
    pub day_of_week: u32,
    pub day_name: String,
    pub hour: u32,
    pub customers_demand: i64,
    pub avg_process_time: f64,
    pub optimal_registers_needed: i64,
    pub actual_registers_open: i64,
    pub staffing_gap: i64,
}

impl From<&StaffingGapRow> for ReportRowExport {
    fn from(row: &StaffingGapRow) -> Self {
        Self {
            day_of_week: row.day_of_week,
            day_name: row.day_name.clone(),
            hour: row.hour,
            customers_demand: row.customers_demand,
            avg_process_time: row.avg_process_time,
            optimal_registers_needed: row.optimal_registers_needed,
            actual_registers_open: row.actual_registers_open,
            staffing_gap: row.staffing_gap,
        }
    }
}

/// Header for CSV / XLSX.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "day_of_week",
        "day_name",
        "hour",
        "customers_demand",
        "avg_process_time",
        "optimal_registers_needed",
        "actual_registers_open",
        "staffing_gap",
    ]
}

/// Convert a row into display strings (XLSX sizing and table dumps).
pub(crate) fn report_to_row(r: &ReportRowExport) -> Vec<String> {
    vec![
        r.day_of_week.to_string(),
        r.day_name.clone(),
        r.hour.to_string(),
        r.customers_demand.to_string(),
        format!("{:.1}", r.avg_process_time),
        r.optimal_registers_needed.to_string(),
        r.actual_registers_open.to_string(),
        r.staffing_gap.to_string(),
    ]
}
