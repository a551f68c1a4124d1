use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_ping, insert_sale};
use crate::errors::{AppError, AppResult};
use crate::ingest::csv::{read_pings, read_sales};
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { pings, sales } = cmd {
        if pings.is_none() && sales.is_none() {
            return Err(AppError::Import(
                "nothing to import: pass --pings and/or --sales".to_string(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if let Some(file) = pings {
            import_pings(&mut pool, file)?;
        }

        if let Some(file) = sales {
            import_sales(&mut pool, file)?;
        }
    }

    Ok(())
}

fn import_pings(pool: &mut DbPool, file: &str) -> AppResult<()> {
    let (rows, rejected) = read_pings(Path::new(file))?;

    // Single transaction: either the whole file lands or none of it.
    let tx = pool.conn.transaction()?;
    for ping in &rows {
        insert_ping(&tx, ping)?;
    }
    tx.commit()?;

    if rejected > 0 {
        warning(format!(
            "{} ping row(s) rejected (malformed or missing timestamp)",
            rejected
        ));
    }
    success(format!("Imported {} ping(s) from {}", rows.len(), file));

    let _ = ttlog(
        &pool.conn,
        "import",
        file,
        &format!("{} pings imported, {} rejected", rows.len(), rejected),
    );

    Ok(())
}

fn import_sales(pool: &mut DbPool, file: &str) -> AppResult<()> {
    let (rows, rejected) = read_sales(Path::new(file))?;

    let tx = pool.conn.transaction()?;
    for sale in &rows {
        insert_sale(&tx, sale)?;
    }
    tx.commit()?;

    if rejected > 0 {
        warning(format!(
            "{} sale row(s) rejected (malformed or missing timestamp)",
            rejected
        ));
    }
    success(format!("Imported {} sale(s) from {}", rows.len(), file));

    let _ = ttlog(
        &pool.conn,
        "import",
        file,
        &format!("{} sales imported, {} rejected", rows.len(), rejected),
    );

    Ok(())
}
