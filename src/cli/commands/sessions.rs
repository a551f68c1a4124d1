use crate::cli::commands::resolve_bounds;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_pings;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{format_timestamp_cell, pad_left};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessions {
        period,
        device,
        gap_minutes,
    } = cmd
    {
        let bounds = resolve_bounds(period)?;
        let gap = gap_minutes.unwrap_or(cfg.session_gap_minutes);

        let mut pool = DbPool::new(&cfg.database)?;
        let pings = load_pings(&mut pool, bounds)?;

        let mut sessions = Core::build_sessions(&pings, cfg, gap);

        if let Some(dev) = device {
            sessions.retain(|s| &s.device_id == dev);
        }

        if sessions.is_empty() {
            println!("No sessions for the selected period.");
            return Ok(());
        }

        header("Checkout sessions");
        print_sessions(&sessions);
        println!("{} session(s)", sessions.len());
    }

    Ok(())
}

fn print_sessions(sessions: &[Session]) {
    let mut table = Table::new(vec![
        Column::left("device", 14),
        Column::right("session", 7),
        Column::left("start", 19),
        Column::left("end", 19),
        Column::right("duration", 8),
    ]);

    for s in sessions {
        // Pad before coloring so zero durations stay aligned when greyed.
        let duration_cell =
            colorize_optional(&pad_left(&format_minutes(s.duration_minutes), 8));

        table.add_row(vec![
            s.device_id.clone(),
            s.session_id.to_string(),
            format_timestamp_cell(&s.start),
            format_timestamp_cell(&s.end),
            duration_cell,
        ]);
    }

    print!("{}", table.render());
}
