//! # grc-core — Foundational Types for the GRC Console Core
//!
//! This crate is the bedrock of the compliance/ESG domain core. It defines
//! the type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain identifiers.** `RequirementId`,
//!    `FindingId`, `MeetingId`, and friends — all newtypes with random-UUID
//!    constructors. No bare strings or raw UUIDs for identifiers, so an
//!    obligation id cannot be handed to a filing lookup.
//!
//! 2. **Status enums as the single source of truth.** Every status family the
//!    console renders (`ComplianceStatus`, `FindingStatus`, `FilingStatus`, …)
//!    is one closed enum defined here and matched exhaustively everywhere.
//!    Adding a variant forces every consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision; date strings are parsed at the boundary
//!    and never silently coerced.
//!
//! 4. **Typed errors, no swallowing.** Domain failures are `thiserror`
//!    values (`DateError`, `TransitionError`, `ValidationError`,
//!    `NotFoundError`) returned synchronously to the caller.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `grc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod display;
pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use display::{classify, Badge, DisplayCategory, StatusKind};
pub use error::{
    DateError, EntityKind, GrcError, NotFoundError, ParseStatusError, TransitionError,
    ValidationError,
};
pub use identity::{
    ActionItemId, AssessmentId, AuditId, CommentId, CommitteeId, ControlId, DocumentId, FilingId,
    FindingId, InitiativeId, MeetingId, MemberId, MetricId, ObligationId, ReminderId,
    RequirementId,
};
pub use status::{
    ActionItemStatus, AssessmentStatus, AttendanceStatus, AuditStatus, CommitteeStatus,
    ComplianceStatus, ControlEffectiveness, FilingStatus, FindingSeverity, FindingStatus,
    MeetingStatus, RequirementStatus, RiskLevel, TrackingStatus,
};
pub use temporal::{
    days_between, format_duration, is_due_soon, is_due_soon_at, is_overdue, is_overdue_at,
    Timestamp, DUE_SOON_WINDOW_DAYS,
};
