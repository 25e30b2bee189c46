use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_announcement_id"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("latestAnnouncementId"))
        .stdout(predicate::str::contains("VERSION"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_announcement_id"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flags() {
    Command::new(env!("CARGO_BIN_EXE_announcement_id"))
        .arg("--no-such-flag")
        .env("VERSION", "1.0.0")
        .assert()
        .code(2);
}
