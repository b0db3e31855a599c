//! Output test harness
//!
//! Runs the target program, loads the reference output, and applies the
//! validation checks. Validation works on plain line vectors so the checks
//! can be exercised without spawning anything.

mod expectation;
mod runner;
mod selfcheck;
mod validator;

pub use expectation::load_expected;
pub use runner::run_target;
pub use selfcheck::run_edge_cases;
pub use validator::{validate, CheckFailure, ValidationReport, CHECK_COUNT, EXPECTED_LINE_COUNT};
