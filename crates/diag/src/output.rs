//! Console formatting for the diagnostic binaries.
//!
//! Stdout is the interface here: the scripts exist to be read by a human
//! chasing a bug, so output stays plain text. `tracing` carries progress
//! and transaction logs separately on stderr.

use crate::findings::{mismatch_count, Finding, Severity};

/// Print a section header.
pub fn section(title: &str) {
    println!();
    println!("== {title} ==");
}

/// Print an aligned key/value line.
pub fn kv(label: &str, value: impl std::fmt::Display) {
    println!("  {label:<22} {value}");
}

/// Print a finding list and return the number of mismatches.
pub fn print_findings(findings: &[Finding]) -> usize {
    for finding in findings {
        let marker = match finding.severity {
            Severity::Ok => "ok ",
            Severity::Mismatch => "!! ",
        };
        println!("  {marker}[{}] {}", finding.label, finding.detail);
    }
    mismatch_count(findings)
}

/// Print the closing summary line.
pub fn summary(mismatches: usize) {
    println!();
    if mismatches == 0 {
        println!("no mismatches found");
    } else {
        println!("{mismatches} mismatch(es) found");
    }
}
