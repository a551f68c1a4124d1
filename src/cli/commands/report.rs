use crate::cli::commands::resolve_bounds;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::{Core, ReportOptions};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_pings, load_sales};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::report::StaffingGapRow;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_gap};
use crate::utils::formatting::{fmt_avg_minutes, fmt_gap, fmt_hour, pad_left};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        gap_minutes,
        strict_area,
        format,
        file,
        force,
    } = cmd
    {
        let bounds = resolve_bounds(period)?;

        let mut opts = ReportOptions::from_config(cfg);
        if let Some(gap) = gap_minutes {
            opts.gap_minutes = *gap;
        }
        if *strict_area {
            opts.strict_area = true;
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let pings = load_pings(&mut pool, bounds)?;
        let sales = load_sales(&mut pool, bounds)?;

        let rows = Core::build_report(&pings, &sales, cfg, &opts)?;

        match file {
            Some(out) => {
                ExportLogic::export(&rows, format, out, *force)?;
                let _ = ttlog(
                    &pool.conn,
                    "report",
                    out,
                    &format!("{} row(s) exported as {}", rows.len(), format.as_str()),
                );
            }
            None => {
                if rows.is_empty() {
                    println!("No report rows for the selected period.");
                    return Ok(());
                }

                header("Cashier staffing gaps");
                print_report(&rows);
                println!("{} bucket(s)", rows.len());
            }
        }
    }

    Ok(())
}

fn print_report(rows: &[StaffingGapRow]) {
    let mut table = Table::new(vec![
        Column::left("day", 9),
        Column::left("hour", 5),
        Column::right("demand", 6),
        Column::right("avg min", 7),
        Column::right("needed", 6),
        Column::right("open", 4),
        Column::right("gap", 4),
    ]);

    for r in rows {
        // The gap cell is padded before coloring so ANSI codes do not
        // disturb the column width.
        let gap_cell = format!(
            "{}{}{}",
            color_for_gap(r.staffing_gap),
            pad_left(&fmt_gap(r.staffing_gap), 4),
            RESET
        );

        table.add_row(vec![
            r.day_name.clone(),
            fmt_hour(r.hour),
            r.customers_demand.to_string(),
            fmt_avg_minutes(r.avg_process_time),
            r.optimal_registers_needed.to_string(),
            r.actual_registers_open.to_string(),
            gap_cell,
        ]);
    }

    print!("{}", table.render());
}
