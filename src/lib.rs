//! seqcheck - output test harness for the sequential-numbers exercise
//!
//! Runs a target program, captures its standard output, and verifies that
//! it prints the integers 1 through 5, one per line, with nothing else.

pub mod cli;
pub mod common;
pub mod harness;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use harness::{validate, CheckFailure, ValidationReport};
