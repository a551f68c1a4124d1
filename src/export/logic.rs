use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportRowExport;
use crate::export::xlsx::export_xlsx;
use crate::models::report::StaffingGapRow;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export entry point for the staffing-gap report.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        rows: &[StaffingGapRow],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        if rows.is_empty() {
            warning("No report rows for the selected period; writing an empty file.");
        }

        let export_rows: Vec<ReportRowExport> = rows.iter().map(ReportRowExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&export_rows, path)?,
            ExportFormat::Json => export_json(&export_rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&export_rows, path)?,
        }

        Ok(())
    }
}
