//! Output validation checks
//!
//! Four checks applied in strict order, short-circuiting on the first
//! failure: line count, line-by-line content equality, numeric/sequential
//! parsing, and range bounds. The ordering is observable through which
//! diagnostic is surfaced, so it must not be rearranged.

use thiserror::Error;

/// Number of lines the target program must print
pub const EXPECTED_LINE_COUNT: usize = 5;

/// Total number of validation checks
pub const CHECK_COUNT: usize = 4;

/// The first check that failed, with its diagnostic payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("Expected 5 lines, got {actual} lines")]
    LineCountMismatch { actual: usize },

    #[error("Line {line}: expected '{expected}', got '{actual}'")]
    LineContentMismatch {
        line: usize,
        expected: String,
        actual: String,
    },

    #[error("Output contains non-numeric values")]
    NonNumericValue,

    #[error("Numbers not sequential at position {position}")]
    NonSequential { position: usize },

    #[error("Range should be 1-5, got {first}-{last}")]
    RangeMismatch { first: i64, last: i64 },
}

/// Outcome of one validation run
///
/// Holds a PASS message per check that ran and passed, in check order, and
/// at most one failure. Validation is a pure function of its inputs, so
/// re-running it yields an identical report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// PASS diagnostics for the checks that succeeded, in order
    pub passes: Vec<String>,
    /// The first failing check, if any; later checks never ran
    pub failure: Option<CheckFailure>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// Number of checks that actually ran (passed plus the one that failed)
    pub fn checks_run(&self) -> usize {
        self.passes.len() + usize::from(self.failure.is_some())
    }
}

/// Validate captured output against the reference sequence
pub fn validate(actual: &[String], expected: &[String]) -> ValidationReport {
    let mut passes = Vec::with_capacity(CHECK_COUNT);
    let fail = |passes: Vec<String>, failure: CheckFailure| ValidationReport {
        passes,
        failure: Some(failure),
    };

    // Check 1: line count
    if actual.len() != EXPECTED_LINE_COUNT {
        return fail(
            passes,
            CheckFailure::LineCountMismatch {
                actual: actual.len(),
            },
        );
    }
    passes.push(format!("Output has {EXPECTED_LINE_COUNT} lines"));

    // Check 2: exact content match against the reference, first mismatch wins
    for (i, (actual_line, expected_line)) in actual.iter().zip(expected.iter()).enumerate() {
        if actual_line != expected_line {
            return fail(
                passes,
                CheckFailure::LineContentMismatch {
                    line: i + 1,
                    expected: expected_line.clone(),
                    actual: actual_line.clone(),
                },
            );
        }
    }
    passes.push("All lines match expected sequence".to_string());

    // Check 3: numeric parse, then consecutive +1 deltas
    let numbers: Vec<i64> = match actual.iter().map(|l| l.parse()).collect() {
        Ok(numbers) => numbers,
        Err(_) => return fail(passes, CheckFailure::NonNumericValue),
    };
    for (i, pair) in numbers.windows(2).enumerate() {
        if pair[1] - pair[0] != 1 {
            return fail(passes, CheckFailure::NonSequential { position: i + 1 });
        }
    }
    passes.push("Numbers are sequential".to_string());

    // Check 4: range bounds
    let (first, last) = (numbers[0], numbers[EXPECTED_LINE_COUNT - 1]);
    if first != 1 || last != 5 {
        return fail(passes, CheckFailure::RangeMismatch { first, last });
    }
    passes.push("Complete range 1-5".to_string());

    ValidationReport {
        passes,
        failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn reference() -> Vec<String> {
        lines(&["1", "2", "3", "4", "5"])
    }

    #[test]
    fn test_exact_sequence_passes_all_checks() {
        let report = validate(&reference(), &reference());
        assert!(report.passed());
        assert_eq!(report.checks_run(), CHECK_COUNT);
        assert_eq!(report.passes[0], "Output has 5 lines");
        assert_eq!(report.passes[3], "Complete range 1-5");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let actual = lines(&["1", "2", "3", "4", "6"]);
        let first = validate(&actual, &reference());
        let second = validate(&actual, &reference());
        assert_eq!(first, second);
    }

    #[test]
    fn test_four_lines_fail_at_count() {
        let report = validate(&lines(&["1", "2", "3", "4"]), &reference());
        assert_eq!(
            report.failure,
            Some(CheckFailure::LineCountMismatch { actual: 4 })
        );
        // Count is the first check, so nothing passed before it
        assert!(report.passes.is_empty());
        assert_eq!(report.checks_run(), 1);
    }

    #[test]
    fn test_six_lines_fail_at_count() {
        let report = validate(&lines(&["1", "2", "3", "4", "5", "6"]), &reference());
        assert_eq!(
            report.failure,
            Some(CheckFailure::LineCountMismatch { actual: 6 })
        );
    }

    #[test]
    fn test_embedded_whitespace_fails_content_not_numeric() {
        // " 3" parses to 3 but is not byte-equal to the reference line
        let report = validate(&lines(&["1", "2", " 3", "4", "5"]), &reference());
        assert_eq!(
            report.failure,
            Some(CheckFailure::LineContentMismatch {
                line: 3,
                expected: "3".to_string(),
                actual: " 3".to_string(),
            })
        );
        // Only the count check passed; numeric checks never ran
        assert_eq!(report.passes, vec!["Output has 5 lines"]);
    }

    #[test]
    fn test_trailing_whitespace_fails_content() {
        let report = validate(&lines(&["1", "2", "3 ", "4", "5"]), &reference());
        assert!(matches!(
            report.failure,
            Some(CheckFailure::LineContentMismatch { line: 3, .. })
        ));
    }

    #[test]
    fn test_content_mismatch_reports_first_differing_line() {
        let report = validate(&lines(&["1", "9", "3", "9", "5"]), &reference());
        assert!(matches!(
            report.failure,
            Some(CheckFailure::LineContentMismatch { line: 2, .. })
        ));
    }

    #[test]
    fn test_non_numeric_value() {
        // Reference matches the actual output, so content equality passes
        // and the numeric parse is the first check to object
        let actual = lines(&["one", "two", "three", "four", "five"]);
        let report = validate(&actual, &actual);
        assert_eq!(report.failure, Some(CheckFailure::NonNumericValue));
        assert_eq!(report.passes.len(), 2);
    }

    #[test]
    fn test_gap_fails_sequential_before_range() {
        // 6 - 4 = 2, so the sequential check fires at the pair starting at
        // position 4; the range check (last != 5) is never reached
        let actual = lines(&["1", "2", "3", "4", "6"]);
        let report = validate(&actual, &actual);
        assert_eq!(
            report.failure,
            Some(CheckFailure::NonSequential { position: 4 })
        );
    }

    #[test]
    fn test_shifted_sequence_fails_range() {
        let actual = lines(&["2", "3", "4", "5", "6"]);
        let report = validate(&actual, &actual);
        assert_eq!(
            report.failure,
            Some(CheckFailure::RangeMismatch { first: 2, last: 6 })
        );
        assert_eq!(report.checks_run(), CHECK_COUNT);
    }

    #[test]
    fn test_content_mismatch_wins_over_numeric_diagnostics() {
        // Output is numerically broken and differs from the reference; the
        // content diagnostic must surface, not the numeric one
        let report = validate(&lines(&["1", "2", "3", "4", "7"]), &reference());
        assert!(matches!(
            report.failure,
            Some(CheckFailure::LineContentMismatch { line: 5, .. })
        ));
    }

    #[test]
    fn test_diagnostic_texts() {
        assert_eq!(
            CheckFailure::LineCountMismatch { actual: 4 }.to_string(),
            "Expected 5 lines, got 4 lines"
        );
        assert_eq!(
            CheckFailure::NonSequential { position: 4 }.to_string(),
            "Numbers not sequential at position 4"
        );
        assert_eq!(
            CheckFailure::RangeMismatch { first: 2, last: 6 }.to_string(),
            "Range should be 1-5, got 2-6"
        );
    }
}
