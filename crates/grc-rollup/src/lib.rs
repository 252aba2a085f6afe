//! # grc-rollup — Derived Statistics
//!
//! Computes the aggregates the console's dashboards and detail headers
//! display: finding counts and severity rollups, compliance rates, budget
//! utilization, metric progress, meeting quorum, and action-item
//! completion.
//!
//! Every function here is a pure read over a collection — recomputing on
//! an unchanged collection always yields the same value, and nothing in
//! this crate mutates a record. Division by zero is defined away at every
//! edge: empty collections and zero denominators roll up to zero, never
//! to NaN or an error.

pub mod aggregate;
pub mod budget;
pub mod completion;
pub mod compliance;
pub mod findings;
pub mod quorum;

// ─── Generic re-exports ─────────────────────────────────────────────

pub use aggregate::count_by;

// ─── Findings re-exports ────────────────────────────────────────────

pub use findings::{
    critical_count, open_count, overdue_count, severity_breakdown, total_count, worst_severity,
    SeverityBreakdown,
};

// ─── Compliance re-exports ──────────────────────────────────────────

pub use compliance::{
    compliance_rate, consistency_notice, expected_status, overdue_obligations, ConsistencyNotice,
};

// ─── Budget / progress re-exports ───────────────────────────────────

pub use budget::{budget_utilization, progress_percent, progress_ratio};

// ─── Quorum re-exports ──────────────────────────────────────────────

pub use quorum::{meeting_quorum, quorum, Quorum};

// ─── Completion re-exports ──────────────────────────────────────────

pub use completion::completion_percent;
