use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::stdout_for;

#[test]
fn plain_is_default() {
    assert_eq!(stdout_for("hello world\n", &["--format", "plain"]), stdout_for("hello world\n", &[]));
}

#[test]
fn json_has_vowels_and_characters() {
    let out = stdout_for("hello world\n", &["--format", "json"]);
    assert_eq!(out.lines().count(), 1);

    let value: Value = serde_json::from_str(out.trim_end()).expect("valid JSON");
    assert_eq!(value["vowels"].as_u64(), Some(3));
    assert_eq!(value["characters"].as_u64(), Some(11));
}
