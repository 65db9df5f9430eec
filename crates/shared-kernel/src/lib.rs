// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ApplicationError, ErrorContext, InfrastructureError, Result, VowelCountError};

pub mod error;
pub mod value_objects;

pub use value_objects::{InputLine, VowelCount};
