use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let pings: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM pings", [], |row| row.get(0))?;
    let sales: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
    let devices: i64 = pool
        .conn
        .query_row("SELECT COUNT(DISTINCT device_id) FROM pings", [], |row| {
            row.get(0)
        })?;

    println!("{}• Pings:{} {}{}{}", CYAN, RESET, GREEN, pings, RESET);
    println!("{}• Sales:{} {}{}{}", CYAN, RESET, GREEN, sales, RESET);
    println!("{}• Devices:{} {}{}{}", CYAN, RESET, GREEN, devices, RESET);

    //
    // 3) PING DATE RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM pings ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM pings ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Ping range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
