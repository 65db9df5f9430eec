// tests/common/mod.rs
#![allow(dead_code)]

//! 共通テストユーティリティ

use assert_cmd::Command;

/// Builds a command for the compiled binary with logging silenced.
pub fn count_vowels_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_count_vowels"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs the binary with `stdin` and returns its stdout.
///
/// # Panics
///
/// Panics if the process exits unsuccessfully or prints non-UTF-8.
pub fn stdout_for(stdin: &str, args: &[&str]) -> String {
    let output = count_vowels_cmd().args(args).write_stdin(stdin).assert().success().get_output().clone();
    String::from_utf8(output.stdout).unwrap_or_else(|e| panic!("stdout was not UTF-8: {e}"))
}
