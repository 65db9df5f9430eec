// src/config.rs
use log::LevelFilter;

use crate::cli::Args;

/// How the count is rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare decimal count.
    #[default]
    Plain,
    /// `{"vowels":N,"characters":M}` on a single line.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self { format: OutputFormat::Plain, log_level: LevelFilter::Warn }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { format: args.format.into(), log_level: args.log_level.into() }
    }
}
