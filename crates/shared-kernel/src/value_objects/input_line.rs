// crates/shared-kernel/src/value_objects/input_line.rs

/// One line of input with its terminator removed.
///
/// `\n`, `\r\n` and a lone `\r` all end the line; anything after the first
/// terminator is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InputLine(String);

impl InputLine {
    /// Builds a line from text that may still carry its terminator.
    pub fn new(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if let Some(end) = text.find(['\r', '\n']) {
            text.truncate(end);
        }
        Self(text)
    }

    /// Builds a line from raw bytes; invalid UTF-8 becomes U+FFFD.
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self::new(String::from_utf8_lossy(raw).into_owned())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of `char`s, not bytes.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<&str> for InputLine {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
