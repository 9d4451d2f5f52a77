use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", dir.path())
        .env_remove("EXPENSE_USER")
        .env_remove("EXPENSE_PASSWORD")
        .env_remove("EXPENSE_LOG");
    cmd
}

fn as_alice(dir: &TempDir) -> Command {
    let mut cmd = expense(dir);
    cmd.env("EXPENSE_USER", "alice").env("EXPENSE_PASSWORD", "hunter2");
    cmd
}

fn setup() -> TempDir {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["account", "create", "alice", "--password", "hunter2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created: alice"));

    for (amount, category) in [("10", "Food"), ("30", "Food"), ("5", "Transport")] {
        as_alice(&dir)
            .args(["add", amount, "--category", category, "--payment-method", "Card"])
            .assert()
            .success();
    }
    dir
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expense(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("exports").is_dir());
}

#[test]
fn duplicate_account_fails() {
    let dir = setup();
    expense(&dir)
        .args(["account", "create", "alice", "--password", "again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn wrong_password_is_rejected() {
    let dir = setup();
    expense(&dir)
        .env("EXPENSE_USER", "alice")
        .env("EXPENSE_PASSWORD", "wrong")
        .args(["report", "weekly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn weekly_report() {
    let dir = setup();
    as_alice(&dir)
        .args(["report", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Weekly Report:"))
        .stdout(predicate::str::contains("Food - Max: 30, Min: 10"))
        .stdout(predicate::str::contains("Transport - Max: 5, Min: 5"));
}

#[test]
fn monthly_report_writes_csv() {
    let dir = setup();
    let out = dir.path().join("out");

    as_alice(&dir)
        .args(["report", "monthly", "--output-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Money Spent: $45.00"))
        .stdout(predicate::str::contains("- Highest spending category: Food ($40.00)"));

    let files: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("monthly-report-"));

    let csv = std::fs::read_to_string(path).unwrap();
    assert_eq!(csv, "Category,Amount\nFood,40.00\nTransport,5.00\nTotal,45.00\n");
}

#[test]
fn empty_monthly_report() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["account", "create", "bob", "--password", "pw"])
        .assert()
        .success();

    expense(&dir)
        .args(["--user", "bob", "--password", "pw", "report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Money Spent: $0.00"))
        .stdout(predicate::str::contains("No expenses recorded this month."));

    let files: Vec<_> = std::fs::read_dir(dir.path().join("exports")).unwrap().collect();
    assert_eq!(files.len(), 1);
    let csv = std::fs::read_to_string(files[0].as_ref().unwrap().path()).unwrap();
    assert_eq!(csv, "Category,Amount\nTotal,0.00\n");
}

#[test]
fn export_week() {
    let dir = setup();
    as_alice(&dir).args(["export", "week"]).assert().success();

    let csv = std::fs::read_to_string(dir.path().join("exports").join("week-expenses.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Date,Amount,Payment Method,Category"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn export_rejects_yearly() {
    let dir = setup();
    as_alice(&dir)
        .args(["export", "yearly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be exported"));
}

#[test]
fn view_table() {
    let dir = setup();
    as_alice(&dir)
        .args(["view", "daily"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment Method"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("3 expense(s), total 45.00"));
}

#[test]
fn other_users_see_nothing() {
    let dir = setup();
    expense(&dir)
        .args(["account", "create", "bob", "--password", "pw"])
        .assert()
        .success();

    expense(&dir)
        .args(["--user", "bob", "--password", "pw", "view", "yearly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found."));
}

#[test]
fn add_rejects_empty_category() {
    let dir = setup();
    as_alice(&dir)
        .args(["add", "4", "--category", " ", "--payment-method", "Cash"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category cannot be empty"));
}

#[test]
fn history_lists_own_activity() {
    let dir = setup();
    as_alice(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense exp-1 by alice"));
}
