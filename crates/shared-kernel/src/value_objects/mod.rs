// crates/shared-kernel/src/value_objects/mod.rs
pub mod input_line;
pub mod vowel_count;

pub use input_line::InputLine;
pub use vowel_count::VowelCount;
