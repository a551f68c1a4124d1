use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::ping::LocationPing;
use crate::models::sale::SaleRecord;
use crate::utils::time::parse_timestamp;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

fn map_ping_row(row: &Row) -> Result<LocationPing> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = parse_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(LocationPing {
        device_id: row.get("device_id")?,
        timestamp,
        area: row.get("area")?,
        role: row.get("role")?,
    })
}

fn map_sale_row(row: &Row) -> Result<SaleRecord> {
    let ts_str: String = row.get("timestamp")?;

    let timestamp = parse_timestamp(&ts_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(SaleRecord {
        sale_id: row.get("sale_id")?,
        timestamp,
    })
}

/// Load pings, optionally bounded to an inclusive date range.
pub fn load_pings(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<LocationPing>> {
    let mut out = Vec::new();

    match bounds {
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT device_id, timestamp, area, role FROM pings
                 WHERE date(timestamp) BETWEEN ?1 AND ?2
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_ping_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT device_id, timestamp, area, role FROM pings ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([], map_ping_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

/// Load sales, optionally bounded to an inclusive date range.
pub fn load_sales(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<SaleRecord>> {
    let mut out = Vec::new();

    match bounds {
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT sale_id, timestamp FROM sales
                 WHERE date(timestamp) BETWEEN ?1 AND ?2
                 ORDER BY id ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_sale_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT sale_id, timestamp FROM sales ORDER BY id ASC")?;
            let rows = stmt.query_map([], map_sale_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_ping(conn: &Connection, ping: &LocationPing) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO pings (device_id, timestamp, area, role, source, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![
        ping.device_id,
        ping.timestamp_str(),
        ping.area,
        ping.role,
        "import",
        Local::now().to_rfc3339(),
    ])?;

    Ok(())
}

pub fn insert_sale(conn: &Connection, sale: &SaleRecord) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO sales (sale_id, timestamp, source, created_at)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        sale.sale_id,
        sale.timestamp_str(),
        "import",
        Local::now().to_rfc3339(),
    ])?;

    Ok(())
}

pub fn load_log(pool: &mut DbPool) -> Result<Vec<(i32, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i32>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
