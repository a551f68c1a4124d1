use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, sg, temp_out};

#[test]
fn test_report_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data("export_csv", &db_path);

    let out = temp_out("export_csv", "csv");

    sg().args([
        "--db", &db_path, "report", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("day_of_week,day_name,hour"));
    assert!(content.contains("Monday"));
}

#[test]
fn test_report_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data("export_json", &db_path);

    let out = temp_out("export_json", "json");

    sg().args([
        "--db", &db_path, "report", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = rows.as_array().expect("array of rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["day_name"], "Monday");
    assert_eq!(rows[0]["customers_demand"], 12);
    assert_eq!(rows[0]["optimal_registers_needed"], 1);
    assert_eq!(rows[0]["staffing_gap"], 1);
}

#[test]
fn test_report_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data("export_xlsx", &db_path);

    let out = temp_out("export_xlsx", "xlsx");

    sg().args([
        "--db", &db_path, "report", "--format", "xlsx", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_report_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relpath");
    init_db_with_data("export_relpath", &db_path);

    sg().args([
        "--db",
        &db_path,
        "report",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_report_export_force_overwrite() {
    let db_path = setup_test_db("export_force");
    init_db_with_data("export_force", &db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("pre-create output");

    sg().args([
        "--db", &db_path, "report", "--format", "csv", "--file", &out, "-f",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Monday"));
}
