// tests/integration/options.rs
use std::fs;

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{PROVIDER_REL, Workspace, provider_source};

#[test]
fn strict_fails_when_field_is_missing() {
    let ws = Workspace::new();
    ws.write(PROVIDER_REL, "export {}\n");

    ws.cmd()
        .env("VERSION", "2.0.0")
        .arg("--strict")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("latestAnnouncementId"));

    assert_eq!(ws.provider(), "export {}\n");
}

#[test]
fn strict_can_come_from_the_environment() {
    let ws = Workspace::new();
    ws.write(PROVIDER_REL, "export {}\n");

    ws.cmd().env("VERSION", "2.0.0").env("ANNOUNCEMENT_STRICT", "true").assert().failure();
}

#[test]
fn strict_passes_when_field_is_present() {
    let ws = Workspace::with_provider("1.0.0");

    ws.cmd().env("VERSION", "2.0.0").arg("--strict").assert().success();

    assert_eq!(ws.provider(), provider_source("2.0.0"));
}

#[test]
fn dry_run_leaves_file_alone() {
    let ws = Workspace::with_provider("1.0.0");

    ws.cmd()
        .env("VERSION", "2.0.0")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would update latestAnnouncementId to 2.0.0"));

    assert_eq!(ws.provider(), provider_source("1.0.0"));
}

#[test]
fn atomic_write_matches_in_place_write_and_leaves_no_temp_files() {
    let ws = Workspace::with_provider("1.0.0");

    ws.cmd().env("VERSION", "2.0.0").arg("--atomic").assert().success();

    assert_eq!(ws.provider(), provider_source("2.0.0"));
    let dir = ws.path().join("src/core/webview");
    let names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["ClineProvider.ts".to_string()]);
}

#[test]
fn target_can_be_overridden() {
    let ws = Workspace::new();
    ws.write("other/Provider.ts", &provider_source("0.1.0"));

    ws.cmd()
        .env("VERSION", "0.2.0")
        .env("PROVIDER_PATH", "other/Provider.ts")
        .assert()
        .success();
    assert_eq!(ws.read("other/Provider.ts"), provider_source("0.2.0"));

    ws.cmd()
        .args(["--release-version", "0.3.0", "--target", "other/Provider.ts"])
        .assert()
        .success();
    assert_eq!(ws.read("other/Provider.ts"), provider_source("0.3.0"));
}

#[test]
fn flag_overrides_environment_version() {
    let ws = Workspace::with_provider("1.0.0");

    ws.cmd()
        .env("VERSION", "2.0.0")
        .args(["--release-version", "3.0.0"])
        .assert()
        .success();

    assert_eq!(ws.provider(), provider_source("3.0.0"));
}

#[test]
fn json_report_describes_the_run() {
    let ws = Workspace::with_provider("3.2.1");

    let output = ws
        .cmd()
        .env("VERSION", "3.3.0")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["version"], "3.3.0");
    assert_eq!(report["field"], "latestAnnouncementId");
    assert_eq!(report["previous"], serde_json::json!(["3.2.1"]));
    assert_eq!(report["replacements"], 1);
    assert_eq!(report["outcome"], "updated");
    assert_eq!(report["written"], true);
}

#[test]
fn json_report_flags_missing_field() {
    let ws = Workspace::new();
    ws.write(PROVIDER_REL, "export {}\n");

    let output = ws
        .cmd()
        .env("VERSION", "1.0.0")
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["outcome"], "no-match");
    assert_eq!(report["replacements"], 0);
}

#[test]
fn debug_logging_goes_to_stderr_only() {
    let ws = Workspace::with_provider("1.0.0");

    ws.cmd()
        .env("VERSION", "2.0.0")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::diff("Updated latestAnnouncementId to 2.0.0\n"))
        .stderr(predicate::str::contains("occurrence"));
}
