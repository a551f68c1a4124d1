use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, sales_csv, setup_test_db, sg, write_fixture, PINGS_CSV};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    sg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    sg().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_import_reports_rejected_rows() {
    let db_path = setup_test_db("import_rejects");

    sg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let pings = write_fixture("import_rejects_pings", PINGS_CSV);

    sg().args(["--db", &db_path, "import", "--pings", &pings])
        .assert()
        .success()
        .stdout(contains("Imported 7 ping(s)"))
        .stdout(contains("1 ping row(s) rejected"));
}

#[test]
fn test_import_without_input_fails() {
    let db_path = setup_test_db("import_empty");

    sg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sg().args(["--db", &db_path, "import"])
        .assert()
        .failure()
        .stderr(contains("nothing to import"));
}

#[test]
fn test_sessions_listing() {
    let db_path = setup_test_db("sessions_list");
    init_db_with_data("sessions_list", &db_path);

    sg().args(["--db", &db_path, "sessions", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("c1"))
        .stdout(contains("c2"))
        .stdout(contains("2 session(s)"));
}

#[test]
fn test_sessions_device_filter() {
    let db_path = setup_test_db("sessions_device");
    init_db_with_data("sessions_device", &db_path);

    sg().args([
        "--db",
        &db_path,
        "sessions",
        "--period",
        "2025-06",
        "--device",
        "c1",
    ])
    .assert()
    .success()
    .stdout(contains("c1").and(contains("c2").not()));
}

#[test]
fn test_report_broad_staffing() {
    let db_path = setup_test_db("report_broad");
    init_db_with_data("report_broad", &db_path);

    // Monday hour 10: 12 sales, 5.0 min average, 1 needed, 2 open → +1.
    // Tuesday hour 9 has sales but no sessions and must be absent.
    sg().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("10:00"))
        .stdout(contains("12"))
        .stdout(contains("5.0"))
        .stdout(contains("+1"))
        .stdout(contains("Tuesday").not());
}

#[test]
fn test_report_strict_area() {
    let db_path = setup_test_db("report_strict");
    init_db_with_data("report_strict", &db_path);

    // Only one of the two cashiers pings from the register area.
    sg().args(["--db", &db_path, "report", "--strict-area"])
        .assert()
        .success()
        .stdout(contains("Monday"))
        .stdout(contains("+1").not());
}

#[test]
fn test_report_empty_period() {
    let db_path = setup_test_db("report_empty");
    init_db_with_data("report_empty", &db_path);

    sg().args(["--db", &db_path, "report", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No report rows"));
}

#[test]
fn test_report_wide_gap_splits_nothing() {
    let db_path = setup_test_db("report_wide_gap");
    init_db_with_data("report_wide_gap", &db_path);

    // With a huge inactivity threshold both customer visits stay single
    // sessions; the report is unchanged for this dataset.
    sg().args(["--db", &db_path, "report", "--gap-minutes", "600"])
        .assert()
        .success()
        .stdout(contains("Monday"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_data("log_ops", &db_path);

    sg().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("import"));
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db_with_data("db_info", &db_path);

    sg().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Pings"))
        .stdout(contains("Sales"))
        .stdout(contains("Devices"));
}

#[test]
fn test_invalid_period_rejected() {
    let db_path = setup_test_db("bad_period");
    init_db_with_data("bad_period", &db_path);

    sg().args(["--db", &db_path, "report", "--period", "junk"])
        .assert()
        .failure()
        .stderr(contains("Invalid"));
}

#[test]
fn test_sales_only_import() {
    let db_path = setup_test_db("sales_only");

    sg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let sales = write_fixture("sales_only_sales", &sales_csv());

    sg().args(["--db", &db_path, "import", "--sales", &sales])
        .assert()
        .success()
        .stdout(contains("Imported 15 sale(s)"));

    // Sales without any sessions produce an empty report, not an error.
    sg().args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("No report rows"));
}
