use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_conf(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn make_dir(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::create_dir_all(&path).unwrap();
    path
}

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("aa-lsm-hook-paths").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_directories_in_priority_order() {
    let tmp = TempDir::new().unwrap();
    let a = make_dir(tmp.path(), "a");
    let b = make_dir(tmp.path(), "b");
    let c = make_dir(tmp.path(), "c");
    let low = write_conf(
        tmp.path(),
        "low.conf",
        &format!("{}\n{}\n", a.display(), b.display()),
    );
    let high = write_conf(tmp.path(), "high.conf", &format!("{}\n", c.display()));

    bin()
        .arg("--config")
        .arg(&low)
        .arg("--config")
        .arg(&high)
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n{}\n{}\n",
            a.display(),
            b.display(),
            c.display()
        )));
}

#[test]
fn missing_config_files_fail_with_message() {
    let tmp = TempDir::new().unwrap();

    bin()
        .arg("--config")
        .arg(tmp.path().join("absent.conf"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "failed to find any configured profile paths",
        ));
}

#[test]
fn json_output_lists_paths() {
    let tmp = TempDir::new().unwrap();
    let profiles = make_dir(tmp.path(), "profiles");
    let conf = write_conf(
        tmp.path(),
        "hook.conf",
        &format!("\n\n{}\n\n", profiles.display()),
    );

    bin()
        .arg("-c")
        .arg(&conf)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(profiles.display().to_string()))
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn require_dir_rejects_plain_files() {
    let tmp = TempDir::new().unwrap();
    let plain = write_conf(tmp.path(), "plain", "");
    let conf = write_conf(tmp.path(), "hook.conf", &format!("{}\n", plain.display()));

    bin().arg("-c").arg(&conf).assert().success();

    bin()
        .arg("-c")
        .arg(&conf)
        .arg("--require-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "failed to find any configured profile paths",
        ));
}

#[test]
fn check_reports_each_entry() {
    let tmp = TempDir::new().unwrap();
    let profiles = make_dir(tmp.path(), "profiles");
    let conf = write_conf(
        tmp.path(),
        "hook.conf",
        &format!("{}\n/does/not/exist\n", profiles.display()),
    );

    bin()
        .arg("-c")
        .arg(&conf)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile Directory Check"))
        .stdout(predicate::str::contains("/does/not/exist"))
        .stdout(predicate::str::contains("MISSING"));
}

#[test]
fn check_json_fails_when_nothing_resolves() {
    let tmp = TempDir::new().unwrap();

    bin()
        .arg("-c")
        .arg(tmp.path().join("absent.conf"))
        .args(["--check", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"state\": \"missing\""));
}

#[test]
fn unreadable_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let as_dir = make_dir(tmp.path(), "dir.conf");

    bin()
        .arg("-c")
        .arg(&as_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn verbose_logs_skipped_entries() {
    let tmp = TempDir::new().unwrap();
    let profiles = make_dir(tmp.path(), "profiles");
    let conf = write_conf(
        tmp.path(),
        "hook.conf",
        &format!("/does/not/exist\n{}\n", profiles.display()),
    );

    bin()
        .arg("-c")
        .arg(&conf)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("dropping profile directory"));
}

#[test]
fn repeated_config_is_rejected() {
    bin()
        .args(["-c", "/tmp/hook.conf", "-c", "/tmp/hook.conf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("given more than once"));
}

#[test]
fn unreadable_config_reports_partial_results() {
    let tmp = TempDir::new().unwrap();
    let profiles = make_dir(tmp.path(), "profiles");
    let first = write_conf(tmp.path(), "first.conf", &format!("{}\n", profiles.display()));
    let as_dir = make_dir(tmp.path(), "dir.conf");

    bin()
        .arg("-c")
        .arg(&first)
        .arg("-c")
        .arg(&as_dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "1 profile directory was resolved before",
        ))
        .stderr(predicate::str::contains("the list is incomplete"));
}
