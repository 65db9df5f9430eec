// crates/ports/src/input.rs
use count_vowels_shared_kernel::{InputLine, Result};

/// A source that can deliver one line of text.
pub trait LineSource {
    /// Reads the next line.
    ///
    /// `Ok(None)` means the stream ended before any byte arrived; an empty
    /// line that was actually terminated comes back as `Ok(Some(..))`.
    fn next_line(&mut self) -> Result<Option<InputLine>>;
}

