//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads one line from a port and tallies its vowels
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::LineTally;
pub use orchestrator::CountVowels;
