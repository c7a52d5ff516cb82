//! CLI integration tests for the `factor63` binary.
//!
//! Split into two tiers, same structure as the rest of this codebase's CLI
//! tests:
//!
//! - **No-database tests** (always run): argument validation and error
//!   handling for a missing or invalid database path.
//! - **Database-dependent tests** (gated on `FACTOR63_TEST_DB`): actual
//!   factorization against a real `factor.bin`, since the production
//!   database is several gigabytes and cannot be shipped as a test fixture.
//!
//! # How to run
//!
//! ```bash
//! cargo test --test cli_tests
//! FACTOR63_TEST_DB=/path/to/factor.bin cargo test --test cli_tests -- --ignored
//! ```

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn factor63_bin() -> Command {
    Command::cargo_bin("factor63").unwrap()
}

#[test]
fn missing_database_reports_error() {
    factor63_bin()
        .arg("--database")
        .arg("/nonexistent/path/to/factor.bin")
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load database"));
}

#[test]
fn rejects_database_flag_pointing_at_directory() {
    let dir = tempfile::tempdir().unwrap();
    factor63_bin()
        .arg("--database")
        .arg(dir.path())
        .arg("12")
        .assert()
        .failure();
}

#[test]
fn database_flag_overrides_env_var() {
    factor63_bin()
        .env("FACTOR63_DB", "/also/nonexistent.bin")
        .arg("--database")
        .arg("/nonexistent/explicit.bin")
        .arg("12")
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicit.bin"));
}

// ---- Database-dependent tests ----
// These require a real factor.bin and are gated behind an environment
// variable rather than `#[ignore]` alone, so CI without the fixture simply
// skips them instead of reporting spurious failures.

fn with_real_db() -> Option<String> {
    std::env::var("FACTOR63_TEST_DB").ok()
}

#[test]
fn factors_small_composite() {
    let Some(db) = with_real_db() else { return };
    factor63_bin()
        .arg("--database")
        .arg(db)
        .arg("360")
        .assert()
        .success()
        .stdout(predicate::str::contains("360:"));
}

#[test]
fn factors_negative_number_includes_minus_one() {
    let Some(db) = with_real_db() else { return };
    factor63_bin()
        .arg("--database")
        .arg(db)
        .arg("-360")
        .assert()
        .success()
        .stdout(predicate::str::contains("-1"));
}

#[test]
fn reads_from_stdin_when_no_positional_args() {
    let Some(db) = with_real_db() else { return };
    factor63_bin()
        .arg("--database")
        .arg(db)
        .write_stdin("12\n97\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("12:").and(predicate::str::contains("97:")));
}
