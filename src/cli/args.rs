// src/cli/args.rs
use clap::Parser;

use super::value_enum::{CliLogLevel, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_vowels",
    version = crate::VERSION,
    about = "標準入力から1行を読み、母音 (a, e, i, o, u) の数を出力します"
)]
pub struct Args {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ログレベル（標準エラーに出力。RUST_LOG が設定されていればそちらを優先）
    #[arg(long, value_enum, default_value = "warn", help_heading = "動作")]
    pub log_level: CliLogLevel,
}
