//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the GRC core. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Transition errors name the entity kind, record id, current state, and
//!   attempted state — the caller rejects the edit, the core never
//!   auto-corrects.
//! - Validation errors are raised before any mutation is applied; a failed
//!   write leaves the record untouched.
//! - Nothing is swallowed internally and nothing is retried — these are
//!   domain validation failures, not transient faults.

use thiserror::Error;

/// The kinds of records the core operates on. Used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Requirement,
    Obligation,
    Control,
    Assessment,
    Finding,
    Audit,
    Committee,
    Member,
    Meeting,
    Attendee,
    ActionItem,
    Filing,
    Document,
    Reminder,
    Comment,
    Initiative,
    Metric,
}

impl EntityKind {
    /// Lowercase name used in error messages and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Requirement => "requirement",
            Self::Obligation => "obligation",
            Self::Control => "control",
            Self::Assessment => "assessment",
            Self::Finding => "finding",
            Self::Audit => "audit",
            Self::Committee => "committee",
            Self::Member => "member",
            Self::Meeting => "meeting",
            Self::Attendee => "attendee",
            Self::ActionItem => "action item",
            Self::Filing => "filing",
            Self::Document => "document",
            Self::Reminder => "reminder",
            Self::Comment => "comment",
            Self::Initiative => "initiative",
            Self::Metric => "metric",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string did not match any variant of its family.
///
/// Raised by `FromStr` on the status enums. The display-classification
/// boundary catches this and falls back to the Secondary category; every
/// other caller propagates it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {family} value: {value:?}")]
pub struct ParseStatusError {
    /// The status family that rejected the value.
    pub family: &'static str,
    /// The value as received.
    pub value: String,
}

/// Unparsable or missing date input.
///
/// Date inputs are never silently coerced to "now"; the only default-fill
/// in the core is the finding close date, which is an explicit lifecycle
/// rule rather than a parse fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input string could not be parsed as a date or timestamp.
    #[error("invalid date {input:?}: {reason}")]
    Invalid {
        /// The input as received.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// A date the operation requires was not supplied.
    #[error("missing required date: {field}")]
    Missing {
        /// The record field that was empty.
        field: &'static str,
    },
}

/// Illegal status transition attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The target state is not reachable from the current state.
    #[error("invalid {kind} transition: {id} {from} -> {to}")]
    Invalid {
        /// Kind of record.
        kind: EntityKind,
        /// Record identifier, prefixed (e.g. `filing:<uuid>`).
        id: String,
        /// Current state label.
        from: String,
        /// Attempted target state label.
        to: String,
    },

    /// The record is in a terminal state and accepts no transitions.
    #[error("{kind} {id} is in terminal state {state}")]
    Terminal {
        /// Kind of record.
        kind: EntityKind,
        /// Record identifier.
        id: String,
        /// The terminal state label.
        state: String,
    },
}

/// Required field missing or invalid for an entity kind.
///
/// Raised before any mutation is applied — all-or-nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not supplied.
    #[error("{kind} is missing required field {field}")]
    MissingField {
        /// Kind of record.
        kind: EntityKind,
        /// The missing field.
        field: &'static str,
    },

    /// A supplied field value violates an invariant.
    #[error("{kind} field {field} is invalid: {reason}")]
    InvalidField {
        /// Kind of record.
        kind: EntityKind,
        /// The offending field.
        field: &'static str,
        /// Which invariant was violated.
        reason: String,
    },
}

/// A record or child was not found where it was expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// A child id was not present under the expected parent.
    #[error("{kind} {id} not found under {parent_kind} {parent_id}")]
    Child {
        /// Kind of the missing child.
        kind: EntityKind,
        /// The child identifier.
        id: String,
        /// Kind of the parent that was searched.
        parent_kind: EntityKind,
        /// The parent identifier.
        parent_id: String,
    },

    /// A top-level record id was not present in the store.
    #[error("{kind} {id} not found")]
    Record {
        /// Kind of record.
        kind: EntityKind,
        /// The record identifier.
        id: String,
    },
}

/// Top-level error type for the GRC core.
#[derive(Error, Debug)]
pub enum GrcError {
    /// Unparsable or missing date input.
    #[error("date error: {0}")]
    Date(#[from] DateError),

    /// Illegal status transition.
    #[error("transition error: {0}")]
    Transition(#[from] TransitionError),

    /// Required-field or invariant violation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Record or child lookup miss.
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Unrecognized status value outside a display context.
    #[error("status error: {0}")]
    Status(#[from] ParseStatusError),
}
