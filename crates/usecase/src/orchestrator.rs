use count_vowels_domain::count_line;
use count_vowels_ports::input::LineSource;
use count_vowels_shared_kernel::{ApplicationError, Result};

use crate::dto::LineTally;

pub struct CountVowels<'a> {
    source: &'a mut dyn LineSource,
}

impl<'a> CountVowels<'a> {
    pub fn new(source: &'a mut dyn LineSource) -> Self {
        Self { source }
    }

    /// Reads exactly one line and counts its vowels.
    ///
    /// A source that ends before delivering a line is an error, not zero.
    pub fn run(&mut self) -> Result<LineTally> {
        let line = self.source.next_line()?.ok_or(ApplicationError::MissingInput)?;
        let tally = LineTally { vowels: count_line(&line), characters: line.char_len() };
        log::debug!("counted {} vowels in {} characters", tally.vowels, tally.characters);
        Ok(tally)
    }
}
