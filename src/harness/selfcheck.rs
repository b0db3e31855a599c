//! Edge-case demonstration table
//!
//! A fixed set of candidate outputs classified by literal equality against
//! the reference sequence. This only illustrates what the harness accepts
//! and rejects; it runs after the main test and never affects the outcome.

use colored::Colorize;

/// The one sequence the harness accepts
const REFERENCE: &[&str] = &["1", "2", "3", "4", "5"];

struct EdgeCase {
    output: &'static [&'static str],
    description: &'static str,
    should_pass: bool,
}

const EDGE_CASES: &[EdgeCase] = &[
    EdgeCase {
        output: &["1", "2", "3", "4", "5"],
        description: "No extra whitespace",
        should_pass: true,
    },
    EdgeCase {
        output: &["1", "2", " 3", "4", "5"],
        description: "Leading space",
        should_pass: false,
    },
    EdgeCase {
        output: &["1", "2", "3 ", "4", "5"],
        description: "Trailing space",
        should_pass: false,
    },
    EdgeCase {
        output: &["1", "", "3", "4", "5"],
        description: "Empty line",
        should_pass: false,
    },
    EdgeCase {
        output: &["1", "2", "3", "4"],
        description: "Missing number",
        should_pass: false,
    },
    EdgeCase {
        output: &["1", "2", "3", "4", "5", "6"],
        description: "Extra number",
        should_pass: false,
    },
    EdgeCase {
        output: &["1", "2.0", "3", "4", "5"],
        description: "Decimal number",
        should_pass: false,
    },
    EdgeCase {
        output: &["one", "two", "three", "four", "five"],
        description: "Text instead of numbers",
        should_pass: false,
    },
];

/// Print the edge-case demonstration table
///
/// Each row is checked with plain equality, no parsing. Always succeeds.
pub fn run_edge_cases() {
    println!("\n{}", "Edge cases:".cyan());

    for case in EDGE_CASES {
        let is_correct = case.output == REFERENCE;
        let marker = if is_correct == case.should_pass {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("  {} {}: {:?}", marker, case.description, case.output);
    }
}
