//! # Domain
//!
//! Pure counting rules, free of I/O:
//!
//! - [`vowel`]: decides whether a single character is a vowel
//! - [`tally`]: counts the vowels of a line in one pass

#![allow(clippy::multiple_crate_versions)]

pub mod tally;
pub mod vowel;

pub use tally::{count_line, count_vowels};
pub use vowel::{VOWELS, is_vowel};
