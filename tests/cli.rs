//! End-to-end tests for the bizbook binary
//!
//! Each test runs against its own temporary data directory via the
//! BIZBOOK_DATA_DIR environment variable.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bizbook(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bizbook").unwrap();
    cmd.env("BIZBOOK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_seeds_default_categories() {
    let dir = TempDir::new().unwrap();

    bizbook(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    bizbook(&dir)
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Office Supplies"))
        .stdout(predicate::str::contains("Miscellaneous"))
        .stdout(predicate::str::contains("8 category(ies)"));
}

#[test]
fn expense_add_and_report_flow() {
    let dir = TempDir::new().unwrap();
    bizbook(&dir).arg("init").assert().success();

    bizbook(&dir)
        .args([
            "expense",
            "add",
            "1200.50",
            "Monthly internet",
            "--date",
            "2024-03-10",
            "--category",
            "Utilities",
            "--vendor",
            "Airtel",
            "--tax-deductible",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: ₹1200.50"));

    bizbook(&dir)
        .args(["report", "expenses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹1200.50"))
        .stdout(predicate::str::contains("Tax Deductible: ₹1200.50"))
        .stdout(predicate::str::contains("Utilities"))
        .stdout(predicate::str::contains("2024-03"))
        .stdout(predicate::str::contains("Airtel"));

    // Date filter excluding the expense
    bizbook(&dir)
        .args(["report", "expenses", "--from", "2024-04-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses: ₹0.00"))
        .stdout(predicate::str::contains("Expense Count:  0"));
}

#[test]
fn expense_add_rejects_non_numeric_amount() {
    let dir = TempDir::new().unwrap();
    bizbook(&dir).arg("init").assert().success();

    bizbook(&dir)
        .args(["expense", "add", "twelve", "Bad amount"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn invoice_create_and_show() {
    let dir = TempDir::new().unwrap();
    bizbook(&dir).arg("init").assert().success();

    bizbook(&dir)
        .args(["client", "add", "Acme Corp", "--email", "billing@acme.test"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created client: Acme Corp"));

    let output = bizbook(&dir)
        .args([
            "invoice",
            "create",
            "Acme Corp",
            "--item",
            "Design work:2:100",
            "--item",
            "Hosting:1:50",
            "--notes",
            "Net 15",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Subtotal: ₹250.00"));
    assert!(stdout.contains("GST (18%): ₹45.00"));
    assert!(stdout.contains("Total: ₹295.00"));

    let number = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Created Invoice: "))
        .expect("invoice number in output")
        .trim()
        .to_string();
    assert!(number.starts_with("INV#"));

    bizbook(&dir)
        .args(["invoice", "show", &number])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill To: Acme Corp"))
        .stdout(predicate::str::contains("CGST (9%):"))
        .stdout(predicate::str::contains("SGST (9%):"))
        .stdout(predicate::str::contains("₹22.50"))
        .stdout(predicate::str::contains("Thank you for your business!"));

    bizbook(&dir)
        .args(["invoice", "pay", &number])
        .assert()
        .success()
        .stdout(predicate::str::contains("as paid"));

    bizbook(&dir)
        .args(["report", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Revenue (paid):   ₹295.00"));
}

#[test]
fn invoice_create_requires_existing_client() {
    let dir = TempDir::new().unwrap();
    bizbook(&dir).arg("init").assert().success();

    bizbook(&dir)
        .args(["invoice", "create", "Nobody", "--item", "Work:1:100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Client not found: Nobody"));
}

#[test]
fn export_expenses_csv_to_file() {
    let dir = TempDir::new().unwrap();
    bizbook(&dir).arg("init").assert().success();

    bizbook(&dir)
        .args([
            "expense",
            "add",
            "500",
            "Stationery",
            "--date",
            "2024-02-01",
            "--category",
            "Office Supplies",
        ])
        .assert()
        .success();

    let out_file = dir.path().join("expenses.csv");
    bizbook(&dir)
        .args(["export", "expenses", "--format", "csv", "--output"])
        .arg(&out_file)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out_file).unwrap();
    assert!(contents.contains("Stationery"));
    assert!(contents.contains("Office Supplies"));
    assert!(contents.contains("500.00"));
}
