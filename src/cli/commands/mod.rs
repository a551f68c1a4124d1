pub mod backup;
pub mod config;
pub mod db;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
pub mod sessions;

use crate::errors::AppResult;
use crate::utils::date::parse_period;
use chrono::NaiveDate;

/// Resolve an optional `--period` into date bounds.
/// `None` and `all` mean the whole archive.
pub(crate) fn resolve_bounds(
    period: &Option<String>,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => Ok(Some(parse_period(p)?)),
    }
}
