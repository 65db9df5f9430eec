// crates/domain/src/tally.rs
use count_vowels_shared_kernel::{InputLine, VowelCount};

use crate::vowel::is_vowel;

/// Counts the vowels in `line`, left to right, in a single pass.
pub fn count_vowels(line: &str) -> VowelCount {
    let mut count = VowelCount::ZERO;
    for c in line.chars() {
        if is_vowel(c) {
            count.increment();
        }
    }
    count
}

/// Same as [`count_vowels`] over an already-terminated line.
#[inline]
pub fn count_line(line: &InputLine) -> VowelCount {
    count_vowels(line.as_str())
}
