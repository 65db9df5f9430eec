// src/app.rs
use std::io::{self, Write};

use count_vowels_infra::BufReadLineSource;
use count_vowels_ports::input::LineSource;
use count_vowels_shared_kernel::{ErrorContext, Result};
use count_vowels_usecase::{CountVowels, LineTally};

use crate::{config::Config, presentation};

/// Reads one line from `source`, counts it and writes the report to `out`.
///
/// Nothing is written when no line arrives.
pub fn run_with<S, W>(source: &mut S, out: &mut W, config: &Config) -> Result<LineTally>
where
    S: LineSource,
    W: Write,
{
    let tally = CountVowels::new(source).run()?;
    presentation::write_report(out, &tally, config.format).context("writing report to stdout")?;
    Ok(tally)
}

/// Counts the first line of standard input and prints it to standard output.
pub fn run(config: &Config) -> Result<LineTally> {
    log::info!("count_vowels v{} · format={:?}", crate::VERSION, config.format);
    let mut source = BufReadLineSource::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&mut source, &mut out, config)
}
