use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn daycare(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("daycare").unwrap();
    cmd.env("DAYCARE_DATA_DIR", data_dir);
    cmd.env_remove("DAYCARE_LOG");
    cmd
}

#[test]
fn test_init_seeds_categories() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 income, 18 expense"));

    assert!(dir.path().join("data").join("daycare.db").exists());
    assert!(dir.path().join("config.json").exists());

    daycare(dir.path())
        .args(["category", "list", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Advertising"))
        .stdout(predicate::str::contains("Wages"));
}

#[test]
fn test_ledger_and_profit_loss() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["income", "add", "100", "-c", "Sales", "-d", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income txn-1"));
    daycare(dir.path())
        .args(["expense", "add", "39.50", "-c", "Supplies", "-d", "2024-01-20"])
        .assert()
        .success();
    daycare(dir.path())
        .args(["expense", "add", "10", "-c", "Supplies", "-d", "2024-02-01"])
        .assert()
        .success();

    daycare(dir.path())
        .args(["report", "profit-loss", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$60.50"));

    daycare(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries, total $49.50"));
}

#[test]
fn test_blank_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["income", "add", "5", "-c", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category is required"));

    daycare(dir.path())
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_check_out_before_check_in_is_a_warning() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["child", "add", "Ada Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chd-1"));

    daycare(dir.path())
        .args(["attendance", "check-out", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Child has not been checked in today"));

    daycare(dir.path())
        .args(["attendance", "check-in", "chd-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked In"));

    daycare(dir.path())
        .args(["attendance", "roster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("1 of 1 currently checked in"));
}

#[test]
fn test_clock_out_before_clock_in_names_employee() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["employee", "add", "Grace Hopper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("emp-1"));

    daycare(dir.path())
        .args(["attendance", "check-out", "1", "--employee"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Employee has not clocked in today."));
}

#[test]
fn test_unwritable_audit_log_does_not_fail_writes() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["child", "add", "Ada Lovelace"])
        .assert()
        .success();
    fs::remove_file(dir.path().join("audit.log")).unwrap();
    fs::create_dir(dir.path().join("audit.log")).unwrap();

    daycare(dir.path())
        .args(["attendance", "check-in", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked In"));

    daycare(dir.path())
        .args(["attendance", "check-out", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked Out"));
}

#[test]
fn test_check_in_unknown_employee_fails() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["attendance", "check-in", "7", "--employee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee not found: emp-7"));
}

#[test]
fn test_import_missing_column_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("expenses.csv");
    fs::write(&csv, "Amount,Date,Comments\n10.00,2024-01-01,paper\n").unwrap();

    daycare(dir.path())
        .args(["expense", "import"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required columns: Type"));

    daycare(dir.path())
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_import_reports_row_errors() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("income.csv");
    fs::write(
        &csv,
        "Amount,Type,Date,Comments\n250.00,Sales,2024-03-01,March tuition\nten,Sales,2024-03-02,\n",
    )
    .unwrap();

    daycare(dir.path())
        .args(["income", "import"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: 1 / Errors: 1"))
        .stdout(predicate::str::contains("Row 2:"));
}

#[test]
fn test_login() {
    let dir = TempDir::new().unwrap();

    daycare(dir.path())
        .args(["login", "--password-stdin"])
        .write_stdin("password\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));

    daycare(dir.path())
        .args(["login", "--password-stdin"])
        .write_stdin("Password\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_tax_report_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("tax.csv");

    daycare(dir.path())
        .args(["income", "add", "1200", "-c", "Sales", "-d", "2024-05-05"])
        .assert()
        .success();

    daycare(dir.path())
        .args(["report", "tax", "--year", "2024", "--period", "annual", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported to"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Start Date,End Date,Line,Amount\n"));
    assert!(csv.contains("2024-01-01,2024-12-31,2024 Taxable Income,1200.00"));
}

#[test]
fn test_attach_and_delete_expense() {
    let dir = TempDir::new().unwrap();
    let receipt = dir.path().join("receipt.txt");
    fs::write(&receipt, "paper towels").unwrap();

    daycare(dir.path())
        .args(["expense", "add", "12", "-c", "Supplies", "-d", "2024-01-02"])
        .assert()
        .success();

    daycare(dir.path())
        .args(["expense", "attach", "txn-1"])
        .arg(&receipt)
        .assert()
        .success()
        .stdout(predicate::str::contains("Attached receipt.txt"));

    let stored = dir.path().join("data").join("expense_files").join("1_receipt.txt");
    assert!(stored.exists());

    daycare(dir.path())
        .args(["expense", "files", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("receipt.txt"));

    daycare(dir.path())
        .args(["expense", "delete", "1"])
        .assert()
        .success();
    assert!(!stored.exists());
}
