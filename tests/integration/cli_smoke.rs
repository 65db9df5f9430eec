use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::count_vowels_cmd;

#[test]
fn shows_help() {
    count_vowels_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("count_vowels"));
}

#[test]
fn shows_version() {
    count_vowels_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    count_vowels_cmd().arg("--nope").write_stdin("hello\n").assert().code(2);
}
