//! # Domain Identity Newtypes
//!
//! Newtype wrappers for every record identifier in the GRC console core.
//! These prevent accidental identifier confusion — you cannot pass an
//! `ObligationId` where a `FindingId` is expected, and a child detached
//! from the wrong parent is a compile error rather than a data defect.
//!
//! Each identifier displays with a kind prefix (`requirement:<uuid>`) so
//! log lines and error messages are unambiguous about what went missing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

record_id!(
    /// Identifier for a regulatory requirement.
    RequirementId,
    "requirement"
);
record_id!(
    /// Identifier for a compliance obligation under a requirement.
    ObligationId,
    "obligation"
);
record_id!(
    /// Identifier for a control implemented against a requirement.
    ControlId,
    "control"
);
record_id!(
    /// Identifier for a compliance assessment.
    AssessmentId,
    "assessment"
);
record_id!(
    /// Identifier for an audit or assessment finding.
    FindingId,
    "finding"
);
record_id!(
    /// Identifier for an audit engagement.
    AuditId,
    "audit"
);
record_id!(
    /// Identifier for a governance committee.
    CommitteeId,
    "committee"
);
record_id!(
    /// Identifier for a committee member.
    MemberId,
    "member"
);
record_id!(
    /// Identifier for a committee meeting.
    MeetingId,
    "meeting"
);
record_id!(
    /// Identifier for a meeting action item.
    ActionItemId,
    "action-item"
);
record_id!(
    /// Identifier for a regulatory filing.
    FilingId,
    "filing"
);
record_id!(
    /// Identifier for an attached document.
    DocumentId,
    "document"
);
record_id!(
    /// Identifier for a filing reminder.
    ReminderId,
    "reminder"
);
record_id!(
    /// Identifier for a filing comment.
    CommentId,
    "comment"
);
record_id!(
    /// Identifier for an ESG initiative.
    InitiativeId,
    "initiative"
);
record_id!(
    /// Identifier for an ESG metric tracked under an initiative.
    MetricId,
    "metric"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(RequirementId::new(), RequirementId::new());
        assert_ne!(FindingId::new(), FindingId::new());
    }

    #[test]
    fn test_display_prefix() {
        let id = RequirementId::new();
        assert!(id.to_string().starts_with("requirement:"));
        let id = ActionItemId::new();
        assert!(id.to_string().starts_with("action-item:"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = FilingId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: FilingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
