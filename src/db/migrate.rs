use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `pings` table has a `source` column.
fn pings_has_source_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('pings')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "source" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `pings` table with the modern schema.
fn create_pings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS pings (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            device_id  TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            area       TEXT NOT NULL,
            role       TEXT NOT NULL,
            source     TEXT NOT NULL DEFAULT 'import',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_pings_device_ts ON pings(device_id, timestamp);
        CREATE INDEX IF NOT EXISTS idx_pings_area_role ON pings(area, role);
        "#,
    )?;
    Ok(())
}

/// Create the `sales` table with the modern schema.
fn create_sales_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            sale_id    TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            source     TEXT NOT NULL DEFAULT 'import',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sales_ts ON sales(timestamp);
        "#,
    )?;
    Ok(())
}

/// Migrate an old `pings` table to include the `source` column.
fn migrate_add_source_to_pings(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "pings")? {
        return Ok(());
    }

    if pings_has_source_column(conn)? {
        return Ok(());
    }

    warning("Adding 'source' column to pings table...");

    conn.execute_batch(
        r#"
        ALTER TABLE pings ADD COLUMN source TEXT NOT NULL DEFAULT 'import';
        "#,
    )?;

    Ok(())
}

/// Run every pending migration. Safe to call on an already up-to-date
/// database; each step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "pings")?;

    create_pings_table(conn)?;
    create_sales_table(conn)?;
    migrate_add_source_to_pings(conn)?;

    if fresh {
        // First run on this file; record it in the internal log.
        let _ = crate::db::log::ttlog(conn, "migration_applied", "pings,sales", "Schema created");
    }

    Ok(())
}
