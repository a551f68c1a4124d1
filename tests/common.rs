#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sg() -> Command {
    cargo_bin_cmd!("staffgap")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffgap.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_staffgap.csv", name));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Pings for one Monday morning (2025-06-02):
/// - two customer checkout sessions (6 and 4 minutes → 5.0 avg at hour 10)
/// - two cashier devices, one at the registers and one in the warehouse
/// - one non-cashier staff device
/// - one row with a malformed timestamp (must be rejected at import)
pub const PINGS_CSV: &str = "\
device_id,timestamp,area,role
c1,2025-06-02 10:00:00,CASH_REGISTERS,customer
c1,2025-06-02 10:06:00,CASH_REGISTERS,customer
c2,2025-06-02 10:01:00,CASH_REGISTERS,customer
c2,2025-06-02 10:05:00,CASH_REGISTERS,customer
s1,2025-06-02 10:15:00,CASH_REGISTERS,cashier
s2,2025-06-02 10:20:00,WAREHOUSE,cashier
w1,2025-06-02 10:30:00,WAREHOUSE,stocker
bad,not-a-timestamp,CASH_REGISTERS,customer
";

/// Twelve Monday hour-10 sales plus three Tuesday hour-9 sales (an hour
/// with demand but no session data, which the report must drop).
pub fn sales_csv() -> String {
    let mut out = String::from("sale_id,timestamp\n");
    for i in 0..12 {
        out.push_str(&format!("m{i},2025-06-02 10:{:02}:00\n", i * 4));
    }
    for i in 0..3 {
        out.push_str(&format!("t{i},2025-06-03 09:{:02}:00\n", i * 10));
    }
    out
}

/// Initialize a DB and import the standard fixture dataset
pub fn init_db_with_data(test_name: &str, db_path: &str) {
    sg().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let pings = write_fixture(&format!("{test_name}_pings"), PINGS_CSV);
    let sales = write_fixture(&format!("{test_name}_sales"), &sales_csv());

    sg().args(["--db", db_path, "import", "--pings", &pings, "--sales", &sales])
        .assert()
        .success();
}
