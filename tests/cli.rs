use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"[
    {"id": "d1", "amount": 110, "category": "Food", "date": "2025-01-15", "description": "Chicken +eggs"},
    {"id": "d2", "amount": 2600, "category": "Shopping", "date": "2025-01-15", "description": "Trousers"},
    {"id": "d3", "amount": 7800, "category": "Other", "date": "2025-02-01", "description": "House rent"},
    {"id": "x1", "amount": "abc", "category": "Unknown", "date": "not-a-date", "description": "Broken"}
]"#;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn write_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[test]
fn summary_reports_totals_and_exceeded_budget() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["summary", "--budget", "10000", "--income", "20000", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Total Spending: ₹10510.00 (4 expenses)"))
        .stdout(contains("Budget Status: exceeded"))
        .stdout(contains("Budget exceeded by ₹510.00"))
        .stdout(contains("Feb 2025"));
}

#[test]
fn summary_without_budget_has_status_none() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["summary", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Budget Status: none"));
}

#[test]
fn budget_set_is_used_by_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["budget", "set", "--budget", "12000", "--income", "30000"])
        .assert()
        .success()
        .stdout(contains("Budget set to ₹12000.00"));

    // 10510 is at least 80% of 12000 (9600) but below it
    expense(&dir)
        .args(["summary", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Budget Status: warning"))
        .stdout(contains("₹1490.00 left"));
}

#[test]
fn budget_set_rejects_zero() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["budget", "set", "--budget", "0", "--income", "100"])
        .assert()
        .failure()
        .stderr(contains("Budget must be positive"));
}

#[test]
fn list_filters_by_search_and_category() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["list", "--search", "RENT", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("House rent"))
        .stdout(contains("Trousers").not())
        .stdout(contains("1 expense(s)"));

    expense(&dir)
        .args(["list", "--category", "Food", "--search", "rent", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn list_rejects_unknown_category_filter() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["list", "--category", "Groceries", "--file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(contains("Unknown category 'Groceries'"));
}

#[test]
fn missing_snapshot_is_reported() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(contains("Expense snapshot not found"));
}

#[test]
fn demo_output_is_a_readable_snapshot() {
    let dir = TempDir::new().unwrap();

    let output = expense(&dir).arg("demo").output().unwrap();
    assert!(output.status.success());

    let path = dir.path().join("demo.json");
    std::fs::write(&path, &output.stdout).unwrap();

    expense(&dir)
        .args(["summary", "--budget", "10000", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Total Spending: ₹10510.00 (3 expenses)"))
        .stdout(contains("Budget Status: exceeded"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("expenses.json"))
        .stdout(contains("Budget:          not set"));
}

#[test]
fn list_category_flag_forgives_case() {
    let dir = TempDir::new().unwrap();
    let file = write_snapshot(&dir);

    expense(&dir)
        .args(["list", "--category", "food", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Chicken +eggs"))
        .stdout(contains("Trousers").not())
        .stdout(contains("1 expense(s)"));
}
