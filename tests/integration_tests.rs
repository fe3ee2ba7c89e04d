//! Integration tests for Mylib CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallel worker greeting"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mylib"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// A single worker prints exactly one greeting line, index 0
#[test]
fn test_hello_single_worker_exact_output() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.args(["hello", "--threads", "1"])
        .assert()
        .success()
        .stdout(predicate::eq("[mylib] Hello from thread 0\n"));
}

/// Four workers print four lines whose sorted indices are 0..4; output
/// order across lines may vary between runs
#[test]
fn test_hello_four_workers_index_multiset() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    let assert = cmd.args(["hello", "--threads", "4"]).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let indices: BTreeSet<usize> = stdout
        .lines()
        .map(|line| {
            line.strip_prefix("[mylib] Hello from thread ")
                .unwrap_or_else(|| panic!("malformed line: {line:?}"))
                .parse()
                .unwrap()
        })
        .collect();

    assert_eq!(stdout.lines().count(), 4);
    assert_eq!(indices, (0..4usize).collect::<BTreeSet<_>>());
}

/// --threads 0 clamps to a single worker rather than failing
#[test]
fn test_hello_zero_threads_clamps_to_one() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.args(["hello", "--threads", "0"])
        .assert()
        .success()
        .stdout(predicate::eq("[mylib] Hello from thread 0\n"));
}

/// Lines never tear, even with far more workers than cores
#[test]
fn test_hello_many_workers_no_torn_lines() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    let assert = cmd.args(["hello", "--threads", "16"]).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 16);
    for line in stdout.lines() {
        assert!(
            line.starts_with("[mylib] Hello from thread "),
            "torn or malformed line: {line:?}"
        );
    }
}

/// A repo-level mylib.toml in the working directory controls the pool size
#[test]
fn test_hello_picks_up_repo_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("mylib.toml"),
        "[parallel]\nmax_threads = 1\nthread_percentage = 100\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::eq("[mylib] Hello from thread 0\n"));
}

/// An explicit --config path overrides the standard locations
#[test]
fn test_hello_with_custom_config_flag() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("pool.toml");
    fs::write(
        &config_path,
        "[parallel]\nmax_threads = 1\nthread_percentage = 100\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("hello")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::eq("[mylib] Hello from thread 0\n"));
}

/// config validate fails on an out-of-range thread percentage
#[test]
fn test_config_validate_rejects_bad_percentage() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[parallel]\nthread_percentage = 0\n").unwrap();

    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("config")
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("thread_percentage"));
}

/// config show renders the merged configuration as TOML
#[test]
fn test_config_show() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("thread_percentage"));
}

/// Greeting output is untouched by --quiet; diagnostics are suppressed
#[test]
fn test_hello_quiet_still_greets() {
    let mut cmd = Command::cargo_bin("mylib").unwrap();
    cmd.args(["--quiet", "hello", "--threads", "1"])
        .assert()
        .success()
        .stdout(predicate::eq("[mylib] Hello from thread 0\n"));
}
