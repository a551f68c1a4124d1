use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,

    /// Physical zone whose pings count as checkout activity.
    #[serde(default = "default_register_area")]
    pub register_area: String,

    /// Device role treated as a customer for session reconstruction.
    #[serde(default = "default_customer_role")]
    pub customer_role: String,

    /// Device role counted as an open register.
    #[serde(default = "default_cashier_role")]
    pub cashier_role: String,

    /// Inactivity gap (minutes) that closes a visit session.
    #[serde(default = "default_session_gap")]
    pub session_gap_minutes: i64,

    /// Sessions shorter than this are discarded as noise.
    #[serde(default = "default_min_session")]
    pub min_session_minutes: i64,

    /// When true, cashiers count as open only while pinging from the
    /// register area (the strict staffing variant).
    #[serde(default)]
    pub cashier_area_only: bool,

    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_register_area() -> String {
    "CASH_REGISTERS".to_string()
}
fn default_customer_role() -> String {
    "customer".to_string()
}
fn default_cashier_role() -> String {
    "cashier".to_string()
}
fn default_session_gap() -> i64 {
    20
}
fn default_min_session() -> i64 {
    1
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            register_area: default_register_area(),
            customer_role: default_customer_role(),
            cashier_role: default_cashier_role(),
            session_gap_minutes: default_session_gap(),
            min_session_minutes: default_min_session(),
            cashier_area_only: false,
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("staffgap")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".staffgap")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffgap.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffgap.sqlite")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. A malformed file is reported but never fatal.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Malformed config file {} ({}); using defaults",
                        path.display(),
                        e
                    ));
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Field names that are absent from the on-disk config and would be
    /// filled with defaults. Used by `config --check`.
    pub fn missing_fields() -> Vec<&'static str> {
        let path = Self::config_file();
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        let doc: serde_yaml::Value = match serde_yaml::from_str(&content) {
            Ok(v) => v,
            Err(_) => return Vec::new(),
        };

        [
            "database",
            "register_area",
            "customer_role",
            "cashier_role",
            "session_gap_minutes",
            "min_session_minutes",
            "cashier_area_only",
            "separator_char",
        ]
        .into_iter()
        .filter(|f| doc.get(f).is_none())
        .collect()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(())
    }
}
