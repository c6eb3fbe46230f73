#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME pointed at an empty temp dir so a
/// personal config file never leaks into the tests.
pub fn rex() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rexpense_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rexpense");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test workbook path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rexpense.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh workbook in test mode
pub fn init_db(db_path: &str) {
    rex()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an expense through the CLI and expect success
pub fn add_expense(db_path: &str, date: &str, amount: &str, category: &str, description: &str) {
    rex()
        .args(["--db", db_path, "add", date, amount, category, description])
        .assert()
        .success();
}
