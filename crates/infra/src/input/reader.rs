// crates/infra/src/input/reader.rs
use std::io::{self, BufRead, StdinLock};

use count_vowels_ports::input::LineSource;
use count_vowels_shared_kernel::{InfrastructureError, InputLine, Result};

/// Reads lines from any buffered reader, one `\n`-terminated chunk at a time.
pub struct BufReadLineSource<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> BufReadLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: Vec::new() }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl BufReadLineSource<StdinLock<'static>> {
    /// Locks standard input for the lifetime of the source.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineSource for BufReadLineSource<R> {
    fn next_line(&mut self) -> Result<Option<InputLine>> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| InfrastructureError::InputRead { source })?;

        if read == 0 {
            log::debug!("input stream closed before a line arrived");
            return Ok(None);
        }

        log::trace!("read {read} bytes of input");
        Ok(Some(InputLine::from_bytes(&self.buf)))
    }
}
