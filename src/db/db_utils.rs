use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Run SQLite's integrity check; returns the raw answer ("ok" when healthy).
pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let answer: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    Ok(answer)
}

/// Reclaim unused space.
pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute_batch("VACUUM;")?;
    Ok(())
}
