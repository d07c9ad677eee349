// Binary-level tests against a fake systemctl
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

const LISTING_SCRIPT: &str = r#"#!/bin/sh
if [ "$1" = "show" ]; then
    echo "ExecMainStatus=${FAKE_EXIT_STATUS:-0}"
    exit 0
fi
if [ -n "$FAKE_LIST_FAILURE" ]; then
    echo "$FAKE_LIST_FAILURE" >&2
    exit 1
fi
cat "$FAKE_LISTING"
"#;

struct Fixture {
    dir: tempfile::TempDir,
    systemctl: PathBuf,
}

impl Fixture {
    fn new(listing: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let systemctl = dir.path().join("systemctl");
        std::fs::write(&systemctl, LISTING_SCRIPT).unwrap();
        std::fs::set_permissions(&systemctl, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("listing"), listing).unwrap();
        Self { dir, systemctl }
    }

    fn listing(&self) -> PathBuf {
        self.dir.path().join("listing")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("unitcheck").unwrap();
        cmd.env("FAKE_LISTING", self.listing())
            .env_remove("FAKE_LIST_FAILURE")
            .env_remove("FAKE_EXIT_STATUS")
            .arg("--systemctl")
            .arg(&self.systemctl)
            .arg("--config")
            .arg(self.config());
        cmd
    }
}

fn write_config(path: &Path, yaml: &str) {
    std::fs::write(path, yaml).unwrap();
}

#[test]
#[serial]
fn critical_unit_failed() {
    let fixture = Fixture::new("sshd.service loaded failed failed OpenSSH server\n");

    fixture
        .command()
        .args(["-s", "sshd.service"])
        .assert()
        .code(2)
        .stdout("CRITICAL: failed: sshd.service \n");
}

#[test]
#[serial]
fn not_loaded_unit_is_ok() {
    let fixture = Fixture::new("foo.service not-found inactive dead foo.service\n");

    fixture.command().assert().code(0).stdout("OK\n");
}

#[test]
#[serial]
fn non_critical_failure_is_warning() {
    let fixture = Fixture::new("cron.service loaded failed failed Cron\n");

    fixture
        .command()
        .assert()
        .code(1)
        .stdout("WARNING: failed: cron.service \n");
}

#[test]
#[serial]
fn crash_loop_uses_exit_status() {
    let fixture = Fixture::new("worker.service loaded activating auto-restart Worker\n");

    fixture.command().env("FAKE_EXIT_STATUS", "0").assert().code(0).stdout("OK\n");

    fixture
        .command()
        .env("FAKE_EXIT_STATUS", "1")
        .assert()
        .code(1)
        .stdout("WARNING: activating auto restart: worker.service \n");
}

#[test]
#[serial]
fn ignored_units_are_skipped() {
    let fixture = Fixture::new(
        "cron.service loaded failed failed Cron\n\
         getty@tty1.service loaded failed failed Getty\n",
    );

    fixture
        .command()
        .args(["-i", "cron.service", "--ignore", "getty@*"])
        .assert()
        .code(0)
        .stdout("OK\n");
}

#[test]
#[serial]
fn critical_units_from_config() {
    let fixture = Fixture::new("nginx.service loaded failed failed nginx\n");
    write_config(&fixture.config(), "critical_units:\n  - nginx.service\n");

    fixture
        .command()
        .assert()
        .code(2)
        .stdout("CRITICAL: failed: nginx.service \n");
}

#[test]
#[serial]
fn listing_failure_is_unknown() {
    let fixture = Fixture::new("");

    fixture
        .command()
        .env("FAKE_LIST_FAILURE", "Failed to connect to bus")
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN: "))
        .stdout(predicate::str::contains("Failed to connect to bus"));
}

#[test]
#[serial]
fn invalid_config_is_unknown() {
    let fixture = Fixture::new("");
    write_config(&fixture.config(), "backend: [not, a, backend]\n");

    fixture
        .command()
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN: "));
}

#[test]
#[serial]
fn usage_error_is_unknown() {
    Command::cargo_bin("unitcheck")
        .unwrap()
        .arg("--no-such-flag")
        .assert()
        .code(3);
}

#[test]
#[serial]
fn help_succeeds() {
    Command::cargo_bin("unitcheck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--critical"))
        .stdout(predicate::str::contains("--ignore"));
}
