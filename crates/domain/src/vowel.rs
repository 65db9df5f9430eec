// crates/domain/src/vowel.rs

/// The five vowels, lowercase.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Returns `true` if `c` is `a`, `e`, `i`, `o` or `u` in either case.
///
/// Case folding is ASCII-only: characters without an ASCII case pass
/// through unchanged and are never vowels.
#[inline]
pub const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
