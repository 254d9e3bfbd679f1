//! Error handling
//!
//! Defines error types for storage access failures.

pub mod types;

pub use types::*;
