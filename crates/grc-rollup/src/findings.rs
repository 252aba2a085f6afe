//! # Finding Rollups
//!
//! Counts and severity aggregates over a findings collection, as shown on
//! audit and assessment headers.

use serde::{Deserialize, Serialize};

use grc_core::{is_overdue_at, FindingSeverity, Timestamp};
use grc_state::Finding;

use crate::aggregate::count_by;

/// Per-severity counts over a findings collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityBreakdown {
    /// Total findings counted.
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Total number of findings.
pub fn total_count(findings: &[Finding]) -> usize {
    findings.len()
}

/// Number of findings with Critical severity — exactly Critical, nothing
/// else counts.
pub fn critical_count(findings: &[Finding]) -> usize {
    count_by(findings, |f| f.severity == FindingSeverity::Critical)
}

/// Number of findings still open (not in a terminal state).
pub fn open_count(findings: &[Finding]) -> usize {
    count_by(findings, |f| !f.status.is_terminal())
}

/// Number of open findings whose target resolution date has passed.
pub fn overdue_count(findings: &[Finding], now: Timestamp) -> usize {
    count_by(findings, |f| {
        !f.status.is_terminal()
            && f.due_date.map(|due| is_overdue_at(due, now)).unwrap_or(false)
    })
}

/// Per-severity counts.
pub fn severity_breakdown(findings: &[Finding]) -> SeverityBreakdown {
    let mut breakdown = SeverityBreakdown::default();
    for f in findings {
        match f.severity {
            FindingSeverity::Low => breakdown.low += 1,
            FindingSeverity::Medium => breakdown.medium += 1,
            FindingSeverity::High => breakdown.high += 1,
            FindingSeverity::Critical => breakdown.critical += 1,
        }
    }
    breakdown
}

/// The most severe finding present, if any.
pub fn worst_severity(findings: &[Finding]) -> Option<FindingSeverity> {
    findings.iter().map(|f| f.severity).max()
}
