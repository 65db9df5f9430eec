// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;

pub use input::BufReadLineSource;
