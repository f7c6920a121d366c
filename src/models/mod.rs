//! Shared data models for scan output.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single finding: one rule matched on one line of one file.
pub struct Issue {
    pub file: String,
    pub line: usize,
    pub rule: String,
    pub message: String,
    /// Trimmed text of the offending line, for human review.
    pub content: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Aggregated scan summary used by printers.
pub struct Summary {
    pub issues: usize,
    pub files: usize,
    pub skipped: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Scan results container.
///
/// Issues are ordered: files in traversal order, lines ascending within a
/// file, rules in declaration order within a line. No deduplication.
pub struct ScanReport {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
