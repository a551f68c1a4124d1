use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for staffgap
/// CLI application to compute cashier staffing gaps from location pings
#[derive(Parser)]
#[command(
    name = "staffgap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct customer checkout sessions from location pings and compute cashier staffing gaps",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import location pings and sales from CSV files
    Import {
        /// Pings CSV file (device_id,timestamp,area,role)
        #[arg(long, value_name = "FILE")]
        pings: Option<String>,

        /// Sales CSV file (sale_id,timestamp)
        #[arg(long, value_name = "FILE")]
        sales: Option<String>,
    },

    /// List reconstructed checkout sessions
    Sessions {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                   → entire year (e.g. "2025")
        /// - YYYY-MM                → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD             → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY
        /// - YYYY-MM:YYYY-MM
        /// - YYYY-MM-DD:YYYY-MM-DD
        ///
        /// Special value:
        /// - all                    → the entire archive
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Only sessions of this device
        #[arg(long, value_name = "ID")]
        device: Option<String>,

        /// Inactivity gap (minutes) closing a session; overrides config
        #[arg(long = "gap-minutes", value_name = "N")]
        gap_minutes: Option<i64>,
    },

    /// Compute the cashier staffing-gap report
    Report {
        /// Filter by period (same grammar as `sessions --period`)
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,

        /// Inactivity gap (minutes) closing a session; overrides config
        #[arg(long = "gap-minutes", value_name = "N")]
        gap_minutes: Option<i64>,

        /// Count cashiers as open only when seen in the register area
        #[arg(long = "strict-area")]
        strict_area: bool,

        /// Export format (requires --file)
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write the report to this file instead of printing it
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip
        #[arg(long)]
        compress: bool,
    },
}
