//! Harness run orchestration
//!
//! Drives one full run: load config, locate the target, load the reference
//! output, execute the target, validate, and report. Target and expectation
//! failures are reported as diagnostics on stdout rather than propagated;
//! the caller only maps the overall outcome to an exit code.

use std::path::PathBuf;

use colored::Colorize;

use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::harness::{self, ValidationReport, CHECK_COUNT};

/// Result of one harness run
#[derive(Debug)]
pub struct HarnessResult {
    pub passed: bool,
    pub checks_run: usize,
    pub checks_total: usize,
    pub error: Option<String>,
}

impl HarnessResult {
    fn failed(checks_run: usize, error: String) -> Self {
        Self {
            passed: false,
            checks_run,
            checks_total: CHECK_COUNT,
            error: Some(error),
        }
    }
}

/// Run the harness once
pub async fn run(verbose: bool, timeout_override: Option<u64>) -> Result<HarnessResult> {
    let config = Config::load()?;
    let timeout_secs = timeout_override.unwrap_or(config.timeouts.run_secs);

    println!("{}", "=== Program Output Tester ===".blue().bold());

    // Locate the program under test
    let program = match locate_target(&config) {
        Ok(program) => program,
        Err(e) => return Ok(report_error(e)),
    };

    // Load the reference output before running anything
    let expected = match harness::load_expected(&config.target.expected) {
        Ok(expected) => expected,
        Err(e) => return Ok(report_error(e)),
    };

    println!("Testing program: {}", program.display());
    if verbose {
        println!("Expected output: {expected:?}");
    }

    // One child process, one shot
    let actual = match harness::run_target(&program, timeout_secs).await {
        Ok(actual) => actual,
        Err(e) => return Ok(report_error(e)),
    };

    if verbose {
        println!("Actual output: {actual:?}");
    }

    let report = harness::validate(&actual, &expected);
    print_report(&report);

    if let Some(failure) = &report.failure {
        println!("\n{} {}", "✗".red().bold(), "Tests failed".red().bold());
        return Ok(HarnessResult::failed(report.checks_run(), failure.to_string()));
    }

    println!(
        "\n{} {}",
        "✓".green().bold(),
        "All tests passed! Program output is correct.".green().bold()
    );

    // Demonstration table, shown only after a passing run
    harness::run_edge_cases();

    Ok(HarnessResult {
        passed: true,
        checks_run: report.checks_run(),
        checks_total: CHECK_COUNT,
        error: None,
    })
}

/// Find the program under test, trying the fallback path second
fn locate_target(config: &Config) -> Result<PathBuf> {
    for candidate in [&config.target.program, &config.target.fallback] {
        if candidate.exists() {
            return Ok(candidate.clone());
        }
    }

    Err(Error::target_not_found(&[
        config.target.program.display().to_string(),
        config.target.fallback.display().to_string(),
    ]))
}

/// Print a terminal diagnostic for a run that never reached validation
fn report_error(e: Error) -> HarnessResult {
    tracing::debug!(error = %e, "run aborted before validation");
    println!("{} {}", "Error:".red().bold(), e);
    println!("\n{} {}", "✗".red().bold(), "Tests failed".red().bold());
    HarnessResult::failed(0, e.to_string())
}

/// Print PASS lines for every passed check and a FAIL line for the first failure
fn print_report(report: &ValidationReport) {
    for msg in &report.passes {
        println!("{}: {}", "PASS".green(), msg);
    }
    if let Some(failure) = &report.failure {
        println!("{}: {}", "FAIL".red(), failure);
    }
}
