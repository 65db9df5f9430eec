// src/presentation.rs
use std::io::Write;

use count_vowels_shared_kernel::Result;
use count_vowels_usecase::LineTally;

use crate::config::OutputFormat;

/// Writes exactly one newline-terminated line describing `tally`.
pub fn write_report<W: Write>(out: &mut W, tally: &LineTally, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", tally.vowels)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, tally)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
