//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: where the line to be counted comes from
//!
//! The use case depends on these traits, never on a concrete stream.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;
