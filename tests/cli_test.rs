//! E2E tests for the moneyfmt CLI.
//!
//! Covers the money, pad, and query subcommands through the real binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

/// Get the moneyfmt binary command.
/// Handles custom build directory by checking env var or falling back to specific path.
fn moneyfmt_cmd() -> Command {
    // Try standard cargo_bin first
    if let Ok(cmd) = Command::cargo_bin("moneyfmt") {
        return cmd;
    }

    // Fallback to hardcoded path seen in environment
    let path = PathBuf::from("/tmp/cargo-target/debug/moneyfmt");
    if path.exists() {
        return Command::new(path);
    }

    panic!("Could not find moneyfmt binary");
}

/// Create a ledger database with a few rows for query tests.
fn seed_ledger(dir: &TempDir) -> PathBuf {
    let db_path = dir.path().join("ledger.sqlite");
    let conn = rusqlite::Connection::open(&db_path).expect("failed to open sqlite db");
    conn.execute_batch(
        "CREATE TABLE ledger (id INTEGER PRIMARY KEY, amount, code TEXT);
         INSERT INTO ledger (amount, code) VALUES (12345, 'USD');
         INSERT INTO ledger (amount, code) VALUES ('bad', 'USD');",
    )
    .expect("failed to seed ledger");
    db_path
}

// =============================================================================
// money
// =============================================================================

#[test]
fn money_formats_amount() {
    moneyfmt_cmd()
        .args(["money", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::diff("    123.45\n"));
}

#[test]
fn money_formats_negative_amount() {
    moneyfmt_cmd()
        .args(["money", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("     -0.05\n"));
}

#[test]
fn money_appends_code() {
    moneyfmt_cmd()
        .args(["money", "12345", "USD"])
        .assert()
        .success()
        .stdout(predicate::str::diff("    123.45 USD\n"));
}

#[test]
fn money_non_integer_prints_blank_placeholder() {
    moneyfmt_cmd()
        .args(["money", "oops"])
        .assert()
        .success()
        .stdout(predicate::str::diff("          \n"));
}

#[test]
fn money_guard_mismatch_prints_blank_placeholder() {
    moneyfmt_cmd()
        .args(["money", "12345", "USD", "--direction", "1", "--required", "2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("              \n"));
}

#[test]
fn money_lone_guard_flag_fails() {
    moneyfmt_cmd()
        .args(["money", "12345", "USD", "--direction", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("together"));
}

#[test]
fn money_json_output() {
    moneyfmt_cmd()
        .args(["money", "12345", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\":\"    123.45\""));
}

// =============================================================================
// pad
// =============================================================================

#[test]
fn pad_appends_trailing_spaces() {
    moneyfmt_cmd()
        .args(["pad", "hello", "10"])
        .assert()
        .success()
        .stdout(predicate::str::diff("hello     \n"));
}

#[test]
fn pad_truncates() {
    moneyfmt_cmd()
        .args(["pad", "hello world", "5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("hello\n"));
}

#[test]
fn pad_negative_width_prints_empty() {
    moneyfmt_cmd()
        .args(["pad", "abc", "-2"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\n"));
}

#[test]
fn pad_json_output() {
    moneyfmt_cmd()
        .args(["pad", "hi", "4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"result\":\"hi  \"}\n"));
}

// =============================================================================
// query
// =============================================================================

#[test]
fn query_runs_in_memory() {
    moneyfmt_cmd()
        .args(["query", "SELECT money(-5) AS amount"])
        .assert()
        .success()
        .stdout(predicate::str::diff("     -0.05\n"));
}

#[test]
fn query_json_rows_carry_column_names() {
    moneyfmt_cmd()
        .args(["query", "SELECT pad('hi', 4) AS padded", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"padded\":\"hi  \"}\n"));
}

#[test]
fn query_formats_ledger_rows() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = seed_ledger(&dir);

    moneyfmt_cmd()
        .args([
            "query",
            "--db",
            db_path.to_str().unwrap(),
            "SELECT money(amount, code) FROM ledger ORDER BY id",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("    123.45 USD\n              \n"));
}

#[test]
fn query_missing_database_fails_with_code_two() {
    moneyfmt_cmd()
        .args(["query", "--db", "/nonexistent/ledger.sqlite", "SELECT 1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

// =============================================================================
// logging
// =============================================================================

#[test]
fn log_level_env_var_enables_debug_logs() {
    moneyfmt_cmd()
        .env_remove("RUST_LOG")
        .env("MONEYFMT_LOG", "debug")
        .args(["money", "12345"])
        .assert()
        .success()
        .stderr(predicate::str::contains("formatting amount"));
}

#[test]
fn compact_log_format_includes_target() {
    moneyfmt_cmd()
        .env_remove("RUST_LOG")
        .env("MONEYFMT_LOG", "debug")
        .env("MONEYFMT_LOG_FORMAT", "compact")
        .args(["money", "12345"])
        .assert()
        .success()
        .stderr(predicate::str::contains("moneyfmt::cli::money"));
}

#[test]
fn log_file_env_var_redirects_logs() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let log_path = dir.path().join("moneyfmt.log");

    moneyfmt_cmd()
        .env_remove("RUST_LOG")
        .env("MONEYFMT_LOG", "debug")
        .env("MONEYFMT_LOG_FILE", &log_path)
        .args(["pad", "hello", "10"])
        .assert()
        .success()
        .stdout(predicate::str::diff("hello     \n"));

    let contents = std::fs::read_to_string(&log_path).expect("log file should exist");
    assert!(contents.contains("padding text"));
}

#[test]
fn query_bad_sql_fails_with_code_three() {
    moneyfmt_cmd()
        .args(["query", "SELEC 1"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("sqlite error"));
}
