use predicates::str::contains;
use rexpense::sheets::{SqliteWorkbook, Workbook, Worksheet};

mod common;
use common::{add_expense, init_db, rex, setup_test_db};

fn budget_log(db_path: &str) -> Vec<Vec<String>> {
    let wb = SqliteWorkbook::open(db_path).expect("open workbook");
    wb.get_all_records(Worksheet::BudgetLog)
        .expect("read budget log")
        .iter()
        .map(|r| {
            ["Food", "Clothing", "Travel", "Meeting"]
                .iter()
                .map(|k| r.get(k).to_string())
                .collect()
        })
        .collect()
}

#[test]
fn test_edit_budget_full() {
    let db_path = setup_test_db("edit_full");
    init_db(&db_path);

    rex()
        .args([
            "--db",
            &db_path,
            "edit-budget",
            "--food",
            "1200",
            "--clothing",
            "900",
            "--travel",
            "950",
            "--meeting",
            "250",
        ])
        .assert()
        .success()
        .stdout(contains("Budget updated successfully!"));

    rex()
        .args(["--db", &db_path, "budget"])
        .assert()
        .success()
        .stdout(contains("Food: $1200.00"))
        .stdout(contains("Clothing: $900.00"))
        .stdout(contains("Travel: $950.00"))
        .stdout(contains("Meeting: $250.00"));
}

#[test]
fn test_edit_budget_partial_keeps_logged_values() {
    let db_path = setup_test_db("edit_partial");
    init_db(&db_path);

    add_expense(&db_path, "2024-05-10", "200", "Food", "lunch");

    rex()
        .args(["--db", &db_path, "edit-budget", "--meeting", "500"])
        .assert()
        .success();

    assert_eq!(
        budget_log(&db_path).last().unwrap(),
        &vec!["1300", "1000", "1000", "500"]
    );
}

#[test]
fn test_edit_budget_without_values_is_a_no_op() {
    let db_path = setup_test_db("edit_empty");
    init_db(&db_path);

    rex()
        .args(["--db", &db_path, "edit-budget"])
        .assert()
        .success()
        .stdout(contains("Nothing to update"));

    assert!(budget_log(&db_path).is_empty());
}

#[test]
fn test_expense_after_edit_uses_new_budget() {
    let db_path = setup_test_db("edit_then_expense");
    init_db(&db_path);

    rex()
        .args(["--db", &db_path, "edit-budget", "--travel", "400"])
        .assert()
        .success();

    add_expense(&db_path, "2024-05-10", "120", "Travel", "train");

    rex()
        .args(["--db", &db_path, "budget"])
        .assert()
        .success()
        .stdout(contains("Travel: $280.00"));
}

#[test]
fn test_fuel_entry_is_recorded() {
    let db_path = setup_test_db("fuel_entry");
    init_db(&db_path);

    rex()
        .args(["--db", &db_path, "fuel", "2024-06-02", "42.7", "1.89", "Shell"])
        .assert()
        .success()
        .stdout(contains("Fuel entry added successfully!"));

    let wb = SqliteWorkbook::open(&db_path).unwrap();
    let rows = wb.get_all_values(Worksheet::Fuel).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["2024-06-02", "42.7", "1.89", "Shell"]);
    assert_eq!(budget_log(&db_path).len(), 0);
}

#[test]
fn test_fuel_with_bad_litres_fails() {
    let db_path = setup_test_db("fuel_bad");
    init_db(&db_path);

    rex()
        .args(["--db", &db_path, "fuel", "2024-06-02", "lots", "1.89", "Shell"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount: lots"));
}
