use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    info("Initializing staffgap…");
    info(format!("Config file : {}", path.display()));
    info(format!("Database    : {}", &db_path));

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", &db_path));

    // Internal log entry; not fatal if it fails.
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        &db_path,
        "Database and configuration initialized",
    ) {
        error(format!("Failed to write internal log: {}", e));
    }

    success("staffgap initialization completed");
    Ok(())
}
