use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{count_vowels_cmd, stdout_for};

#[test]
fn counts_known_lines() {
    assert_eq!(stdout_for("hello world\n", &[]), "3\n");
    assert_eq!(stdout_for("Programming\n", &[]), "3\n");
    assert_eq!(stdout_for("xyz\n", &[]), "0\n");
}

#[test]
fn case_insensitive() {
    assert_eq!(stdout_for("AEIOU\n", &[]), "5\n");
    assert_eq!(stdout_for("aeiou\n", &[]), "5\n");
}

#[test]
fn empty_line_prints_zero() {
    assert_eq!(stdout_for("\n", &[]), "0\n");
}

#[test]
fn unterminated_line_is_counted() {
    assert_eq!(stdout_for("hello", &[]), "2\n");
}

#[test]
fn crlf_terminator_is_not_counted() {
    assert_eq!(stdout_for("Education\r\n", &[]), "5\n");
}

#[test]
fn lone_carriage_return_ends_the_line() {
    assert_eq!(stdout_for("aa\ree\n", &[]), "2\n");
}

#[test]
fn only_first_line_is_read() {
    assert_eq!(stdout_for("aa\neeee\n", &[]), "2\n");
}

#[test]
fn empty_stream_fails_without_output() {
    count_vowels_cmd()
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Application Error: No input line"));
}

#[test]
fn logs_go_to_stderr_only() {
    count_vowels_cmd()
        .args(["--log-level", "debug"])
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stdout("3\n")
        .stderr(predicate::str::contains("counted 3 vowels"));
}
