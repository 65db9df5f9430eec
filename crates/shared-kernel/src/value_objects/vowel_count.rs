// crates/shared-kernel/src/value_objects/vowel_count.rs
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Number of vowels seen in a line. Only ever grows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VowelCount(usize);

impl VowelCount {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Records one more vowel. Saturates instead of wrapping.
    #[inline]
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Add for VowelCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl PartialEq<usize> for VowelCount {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl From<usize> for VowelCount {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

mod display {
    use std::fmt;

    use super::VowelCount;

    impl fmt::Display for VowelCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
