// crates/infra/src/input.rs
mod reader;

pub use reader::BufReadLineSource;
