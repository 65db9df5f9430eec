// crates/usecase/src/dto.rs
use count_vowels_shared_kernel::VowelCount;
use serde::Serialize;

/// Result of counting a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineTally {
    pub vowels: VowelCount,
    pub characters: usize,
}
