//! # grc-state — Lifecycle State Machines
//!
//! Implements the record lifecycles of the GRC console core. Each record
//! that has a lifecycle (Finding, Audit, Assessment, CommitteeMeeting,
//! Filing) is a struct whose transition methods validate against the
//! closed status enums in `grc-core` and append to an ordered transition
//! log. Invalid transitions are rejected with a structured
//! [`TransitionError`](grc_core::TransitionError) naming the record kind,
//! id, current state, and attempted state — the caller rejects the edit;
//! the core never auto-corrects.
//!
//! ## State Machines
//!
//! - **Finding** (`finding.rs`): `Open ⇄ In Progress → Resolved/Closed`.
//!   The terminal label depends on the finding's origin (assessment
//!   findings resolve, audit findings close), and entering it requires a
//!   close date — defaulted to now when the caller omits one.
//!
//! - **Audit** (`audit.rs`): `Scheduled → In Progress → Completed →
//!   Reviewed`. Owns its findings.
//!
//! - **Assessment** (`assessment.rs`): `Planned → In Progress → Completed`.
//!   Owns its findings.
//!
//! - **CommitteeMeeting** (`meeting.rs`): `Scheduled → In Progress →
//!   Completed` with a `Cancelled` branch. Minutes submission always
//!   finalizes the meeting in the same operation.
//!
//! - **Filing** (`filing.rs`): `Draft → Pending Review → Submitted →
//!   Accepted/Rejected` with the `Rejected → Amended → Pending Review`
//!   resubmission loop. Every transition appends one history entry; the
//!   history list is append-only and survives child detachment.
//!
//! ## Design
//!
//! These machines use enum states with `Result`-returning transitions
//! rather than typestate types: the statuses live in records the
//! presentation layer round-trips through serde, so the state must be a
//! runtime value, and the per-machine state counts are small. The legal
//! transition tables themselves live on the status enums in `grc-core`
//! (`valid_transitions()`), so the machines and the exhaustive matrix
//! tests consult one table.

pub mod assessment;
pub mod audit;
pub mod filing;
pub mod finding;
pub mod meeting;

// ─── Finding re-exports ─────────────────────────────────────────────

pub use finding::{Finding, FindingEdit, FindingOrigin, FindingTransitionRecord};

// ─── Audit re-exports ───────────────────────────────────────────────

pub use audit::{Audit, AuditTransitionRecord};

// ─── Assessment re-exports ──────────────────────────────────────────

pub use assessment::{Assessment, AssessmentTransitionRecord};

// ─── Meeting re-exports ─────────────────────────────────────────────

pub use meeting::{
    ActionItem, CommitteeMeeting, MeetingAttendee, MeetingTransitionRecord,
};

// ─── Filing re-exports ──────────────────────────────────────────────

pub use filing::{
    Filing, FilingComment, FilingDocument, FilingHistoryEntry, FilingReminder,
};
