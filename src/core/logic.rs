use crate::config::Config;
use crate::core::{demand, durations, sessionizer, staffing, supply};
use crate::errors::AppResult;
use crate::models::ping::LocationPing;
use crate::models::report::StaffingGapRow;
use crate::models::sale::SaleRecord;
use crate::models::session::Session;

/// Knobs for one pipeline run, resolved from config plus CLI overrides.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub gap_minutes: i64,
    pub min_session_minutes: i64,
    pub strict_area: bool,
}

impl ReportOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            gap_minutes: cfg.session_gap_minutes,
            min_session_minutes: cfg.min_session_minutes,
            strict_area: cfg.cashier_area_only,
        }
    }
}

pub struct Core;

impl Core {
    /// Reconstruct the customer checkout sessions for inspection.
    pub fn build_sessions(
        pings: &[LocationPing],
        cfg: &Config,
        gap_minutes: i64,
    ) -> Vec<Session> {
        let checkout = Self::checkout_pings(pings, cfg);
        let tagged = sessionizer::tag_sessions(&checkout, gap_minutes);
        durations::collect_sessions(&tagged)
    }

    /// Run the full staffing pipeline: sessions → dwell times → supply,
    /// plus the independent demand and actual-staffing aggregates, joined
    /// into the ordered report.
    pub fn build_report(
        pings: &[LocationPing],
        sales: &[SaleRecord],
        cfg: &Config,
        opts: &ReportOptions,
    ) -> AppResult<Vec<StaffingGapRow>> {
        let checkout = Self::checkout_pings(pings, cfg);
        let tagged = sessionizer::tag_sessions(&checkout, opts.gap_minutes);
        let sessions = durations::collect_sessions(&tagged);
        let dwells = durations::qualifying_dwells(&sessions, opts.min_session_minutes);

        let supply = supply::average_dwell(&dwells);
        let demand = demand::count_sales(sales);

        let register_area = opts.strict_area.then_some(cfg.register_area.as_str());
        let actual = staffing::count_open_registers(pings, &cfg.cashier_role, register_area);

        staffing::build_gap_rows(&supply, &demand, &actual)
    }

    /// Pings that count as checkout activity: customer devices seen in the
    /// register area.
    fn checkout_pings(pings: &[LocationPing], cfg: &Config) -> Vec<LocationPing> {
        pings
            .iter()
            .filter(|p| p.area == cfg.register_area && p.role == cfg.customer_role)
            .cloned()
            .collect()
    }
}
