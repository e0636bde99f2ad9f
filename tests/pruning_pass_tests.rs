// End-to-end tests for the backup-pruner binary.
//
// A shell script stands in for the native backup tool. It records every
// invocation to a calls file, so the tests can assert which targets were
// attempted and in which order. Unix exit codes are truncated to 8 bits,
// so the "not mounted" sentinel path is covered by unit tests instead.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

struct Fixture {
    temp_dir: TempDir,
    config_path: PathBuf,
    calls_path: PathBuf,
    log_dir: PathBuf,
}

impl Fixture {
    /// Set up a fake tool plus a config listing the given target volumes.
    /// The fake tool exits 2 for any volume containing "vol-bad" and
    /// otherwise prints two progress lines and exits 0.
    fn new(volumes: &[&str]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let calls_path = temp_dir.path().join("calls.txt");
        let log_dir = temp_dir.path().join("logs");

        let tool_path = temp_dir.path().join("fake-wbadmin.sh");
        let script = format!(
            r#"#!/bin/sh
echo "$@" >> "{calls}"
case "$*" in
  *vol-bad*) exit 2 ;;
esac
echo "Pruned 5 old backups"
echo "Deleted backup version 2026-08-01"
exit 0
"#,
            calls = calls_path.display()
        );
        fs::write(&tool_path, script).unwrap();
        fs::set_permissions(&tool_path, fs::Permissions::from_mode(0o755)).unwrap();

        let mut config = format!(
            r#"
[global]
tool_path = "{tool}"
keep_versions = 20
log_directory = "{logs}"
log_level = "debug"
"#,
            tool = tool_path.display(),
            logs = log_dir.display()
        );
        for (i, volume) in volumes.iter().enumerate() {
            config.push_str(&format!(
                "\n[[targets]]\nlabel = \"DISK_{:02}\"\nvolume = \"{}\"\n",
                i + 1,
                volume
            ));
        }

        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, config).unwrap();

        Self {
            temp_dir,
            config_path,
            calls_path,
            log_dir,
        }
    }

    fn run(&self) -> Command {
        let mut cmd = Command::cargo_bin("backup-pruner").unwrap();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    fn recorded_calls(&self) -> Vec<String> {
        if !self.calls_path.exists() {
            return Vec::new();
        }
        fs::read_to_string(&self.calls_path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Concatenated contents of every log file the pass wrote
    fn log_contents(&self) -> String {
        let mut contents = String::new();
        if let Ok(entries) = fs::read_dir(&self.log_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                contents.push_str(&fs::read_to_string(entry.path()).unwrap_or_default());
            }
        }
        contents
    }
}

#[test]
#[serial]
fn test_successful_pass_attempts_every_target_in_order() {
    let fixture = Fixture::new(&["vol-1", "vol-2", "vol-3"]);

    fixture.run().arg("run").assert().success();

    let calls = fixture.recorded_calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].contains("-backupTarget:vol-1"));
    assert!(calls[1].contains("-backupTarget:vol-2"));
    assert!(calls[2].contains("-backupTarget:vol-3"));

    // Every invocation carries the full argument shape
    for call in &calls {
        assert!(call.contains("delete backup"));
        assert!(call.contains("-keepVersions:20"));
        assert!(call.contains("-quiet"));
    }
}

#[test]
#[serial]
fn test_successful_pass_logs_tool_output_and_completion() {
    let fixture = Fixture::new(&["vol-1"]);

    fixture.run().assert().success();

    let log = fixture.log_contents();
    assert!(log.contains("DISK_01 started job"));
    assert!(log.contains("Pruned 5 old backups"));
    assert!(log.contains("Deleted backup version 2026-08-01"));
    assert!(log.contains("DISK_01 backups successfully pruned down to 20"));
}

#[test]
#[serial]
fn test_unexpected_failure_exits_1_and_skips_later_targets() {
    let fixture = Fixture::new(&["vol-1", "vol-bad", "vol-3"]);

    fixture
        .run()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("DISK_02"));

    let calls = fixture.recorded_calls();
    assert_eq!(calls.len(), 2);
    assert!(!calls.iter().any(|c| c.contains("vol-3")));

    let log = fixture.log_contents();
    assert!(log.contains("DISK_01 started job"));
    assert!(log.contains("DISK_02 started job"));
    assert!(log.contains("exited with exit code: 2"));
    assert!(!log.contains("DISK_03"));
}

#[test]
#[serial]
fn test_zero_targets_is_a_successful_noop() {
    let fixture = Fixture::new(&[]);

    fixture.run().assert().success();

    assert!(fixture.recorded_calls().is_empty());
}

#[test]
#[serial]
fn test_list_prints_targets_without_invoking_the_tool() {
    let fixture = Fixture::new(&["vol-1", "vol-2"]);

    fixture
        .run()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("DISK_01"))
        .stdout(predicate::str::contains("vol-2"))
        .stdout(predicate::str::contains("keep 20 versions"));

    assert!(fixture.recorded_calls().is_empty());
}

#[test]
#[serial]
fn test_validate_accepts_reachable_tool() {
    let fixture = Fixture::new(&["vol-1"]);

    fixture
        .run()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration valid"));
}

#[test]
#[serial]
fn test_validate_rejects_missing_tool() {
    let fixture = Fixture::new(&["vol-1"]);

    // Point the config at a tool that does not exist
    let config = fs::read_to_string(&fixture.config_path).unwrap();
    let broken = config.replace("fake-wbadmin.sh", "missing-wbadmin.sh");
    fs::write(&fixture.config_path, broken).unwrap();

    fixture.run().arg("validate").assert().failure();
}

#[test]
#[serial]
fn test_invalid_config_fails_before_any_invocation() {
    let fixture = Fixture::new(&["vol-1"]);

    let config_path = fixture.temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[global]\n").unwrap();

    Command::cargo_bin("backup-pruner")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure();

    assert!(fixture.recorded_calls().is_empty());
}
