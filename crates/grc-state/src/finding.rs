//! # Finding Lifecycle State Machine
//!
//! Models findings raised by audits and assessments, with severity,
//! remediation tracking, and the close-date invariant.
//!
//! ## States
//!
//! ```text
//! Open ──▶ In Progress ──▶ Resolved (assessment findings, terminal)
//!   │  ◀──     │
//!   │          └─────────▶ Closed (audit findings, terminal)
//!   └────────────────────▶ Resolved/Closed
//! ```
//!
//! ## Close-Date Invariant
//!
//! A finding cannot be terminal without a close date at or after its
//! identified date. When the caller closes without supplying a date, the
//! current time is filled in — the console's close forms pre-fill today,
//! and the core honors the same default. A supplied date earlier than the
//! identified date is rejected before any mutation.
//!
//! ## Diverged Terminal Labels
//!
//! Assessment findings finish as "Resolved"; audit findings finish as
//! "Closed". The two labels are historically diverged names for the same
//! concept and are kept distinct — the finding's origin decides which one
//! it may enter.

use serde::{Deserialize, Serialize};

use grc_core::{
    AssessmentId, AuditId, EntityKind, FindingId, FindingSeverity, FindingStatus, GrcError,
    Timestamp, TransitionError, ValidationError,
};

// ─── Origin ─────────────────────────────────────────────────────────

/// Which record family raised a finding, with the owning parent's id.
///
/// This is the typed form of the console's `entityType` + `entityId`
/// pair: the parent reference cannot name the wrong kind of record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entityType", content = "entityId", rename_all = "lowercase")]
pub enum FindingOrigin {
    /// Raised during an audit engagement.
    Audit(AuditId),
    /// Raised during a compliance assessment.
    Assessment(AssessmentId),
}

impl FindingOrigin {
    /// The terminal status label findings of this origin finish in.
    pub fn terminal_status(&self) -> FindingStatus {
        match self {
            Self::Audit(_) => FindingStatus::Closed,
            Self::Assessment(_) => FindingStatus::Resolved,
        }
    }
}

// ─── Transition Record ──────────────────────────────────────────────

/// Record of a finding state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingTransitionRecord {
    /// State before the transition.
    pub from_status: FindingStatus,
    /// State after the transition.
    pub to_status: FindingStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

// ─── Edit Boundary ──────────────────────────────────────────────────

/// A field-by-field edit to a finding.
///
/// This replaces the console's spread-merge of form values: every field
/// is applied explicitly, and the close-date invariant is enforced here,
/// at the merge boundary, before anything is written. `None` means
/// "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct FindingEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub severity: Option<FindingSeverity>,
    pub due_date: Option<Timestamp>,
    /// Target status; routed through the transition rules.
    pub status: Option<FindingStatus>,
    /// Close date to use when `status` is terminal.
    pub closed_date: Option<Timestamp>,
}

// ─── Finding ────────────────────────────────────────────────────────

/// A finding with its remediation state and transition history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Unique finding identifier.
    pub id: FindingId,
    /// Short title.
    pub title: String,
    /// Narrative description.
    pub description: String,
    /// Severity; rollups count and maximize over this.
    pub severity: FindingSeverity,
    /// Current remediation status.
    pub status: FindingStatus,
    /// The audit or assessment that raised this finding.
    pub origin: FindingOrigin,
    /// When the finding was identified.
    pub identified_date: Timestamp,
    /// Target resolution date, if one was set.
    pub due_date: Option<Timestamp>,
    /// Actual resolution date; present iff the finding is terminal.
    pub closed_date: Option<Timestamp>,
    /// Ordered log of all state transitions.
    pub transitions: Vec<FindingTransitionRecord>,
}

impl Finding {
    /// Create a new open finding.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title.
    pub fn new(
        title: impl Into<String>,
        severity: FindingSeverity,
        origin: FindingOrigin,
        identified_date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Finding,
                field: "title",
            });
        }
        Ok(Self {
            id: FindingId::new(),
            title,
            description: String::new(),
            severity,
            status: FindingStatus::Open,
            origin,
            identified_date,
            due_date: None,
            closed_date: None,
            transitions: Vec::new(),
        })
    }

    /// Begin remediation (Open → In Progress).
    pub fn start_progress(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FindingStatus::InProgress)?;
        self.do_transition(FindingStatus::InProgress);
        Ok(())
    }

    /// Return to the open queue (In Progress → Open).
    pub fn reopen(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FindingStatus::Open)?;
        self.do_transition(FindingStatus::Open);
        Ok(())
    }

    /// Close the finding into its origin's terminal status.
    ///
    /// `closed_date` defaults to now when omitted. A supplied date earlier
    /// than the identified date is rejected and nothing is mutated.
    pub fn close(&mut self, closed_date: Option<Timestamp>) -> Result<(), GrcError> {
        let target = self.origin.terminal_status();
        self.require_transition(target)?;
        let at = self.resolve_close_date(closed_date)?;
        self.closed_date = Some(at);
        self.do_transition(target);
        Ok(())
    }

    /// Apply a form edit field by field.
    ///
    /// All validation happens before any field is written (all-or-nothing).
    /// A status change is routed through the same transition rules as the
    /// named methods; a terminal target picks up the edit's close date or
    /// defaults to now.
    pub fn apply_edit(&mut self, edit: FindingEdit) -> Result<(), GrcError> {
        // Validate everything first.
        if let Some(title) = &edit.title {
            if title.trim().is_empty() {
                return Err(ValidationError::MissingField {
                    kind: EntityKind::Finding,
                    field: "title",
                }
                .into());
            }
        }

        let status_change = match edit.status {
            Some(to) if to != self.status => {
                self.require_transition(to)?;
                if to.is_terminal() {
                    let at = self.resolve_close_date(edit.closed_date)?;
                    Some((to, Some(at)))
                } else {
                    Some((to, None))
                }
            }
            _ => None,
        };

        // Mutate.
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(severity) = edit.severity {
            self.severity = severity;
        }
        if let Some(due) = edit.due_date {
            self.due_date = Some(due);
        }
        if let Some((to, closed)) = status_change {
            if let Some(at) = closed {
                self.closed_date = Some(at);
            }
            self.do_transition(to);
        }
        Ok(())
    }

    /// Whether the finding is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Validate that `to` is reachable from the current status for this
    /// finding's origin.
    fn require_transition(&self, to: FindingStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            tracing::warn!(finding = %self.id, state = %self.status, "transition from terminal state rejected");
            return Err(TransitionError::Terminal {
                kind: EntityKind::Finding,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        let reachable = self.status.valid_transitions().contains(&to);
        // The wrong terminal label for this origin is just as illegal as
        // an unknown state.
        let origin_ok = !to.is_terminal() || to == self.origin.terminal_status();
        if !reachable || !origin_ok {
            tracing::warn!(finding = %self.id, from = %self.status, to = %to, "invalid transition rejected");
            return Err(TransitionError::Invalid {
                kind: EntityKind::Finding,
                id: self.id.to_string(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Default-fill and validate the close date.
    fn resolve_close_date(
        &self,
        supplied: Option<Timestamp>,
    ) -> Result<Timestamp, ValidationError> {
        let at = supplied.unwrap_or_else(Timestamp::now);
        if at < self.identified_date {
            return Err(ValidationError::InvalidField {
                kind: EntityKind::Finding,
                field: "closedDate",
                reason: format!(
                    "close date {at} precedes identified date {}",
                    self.identified_date
                ),
            });
        }
        Ok(at)
    }

    /// Record a state transition.
    fn do_transition(&mut self, to: FindingStatus) {
        tracing::debug!(finding = %self.id, from = %self.status, to = %to, "finding transition");
        self.transitions.push(FindingTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
        });
        self.status = to;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn audit_finding() -> Finding {
        Finding::new(
            "Access review gap",
            FindingSeverity::High,
            FindingOrigin::Audit(AuditId::new()),
            Timestamp::parse("2026-01-15T00:00:00Z").unwrap(),
        )
        .unwrap()
    }

    fn assessment_finding() -> Finding {
        Finding::new(
            "Policy out of date",
            FindingSeverity::Medium,
            FindingOrigin::Assessment(AssessmentId::new()),
            Timestamp::parse("2026-01-15T00:00:00Z").unwrap(),
        )
        .unwrap()
    }

    // ── Construction ────────────────────────────────────────────────

    #[test]
    fn test_new_finding_is_open() {
        let f = audit_finding();
        assert_eq!(f.status, FindingStatus::Open);
        assert!(f.closed_date.is_none());
        assert!(f.transitions.is_empty());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Finding::new(
            "   ",
            FindingSeverity::Low,
            FindingOrigin::Audit(AuditId::new()),
            Timestamp::now(),
        );
        assert!(matches!(
            result,
            Err(ValidationError::MissingField { field: "title", .. })
        ));
    }

    // ── Happy-path lifecycle ────────────────────────────────────────

    #[test]
    fn test_open_to_in_progress_and_back() {
        let mut f = audit_finding();
        f.start_progress().unwrap();
        assert_eq!(f.status, FindingStatus::InProgress);
        f.reopen().unwrap();
        assert_eq!(f.status, FindingStatus::Open);
        assert_eq!(f.transitions.len(), 2);
    }

    #[test]
    fn test_audit_finding_closes_as_closed() {
        let mut f = audit_finding();
        f.start_progress().unwrap();
        f.close(Some(Timestamp::parse("2026-02-01T00:00:00Z").unwrap()))
            .unwrap();
        assert_eq!(f.status, FindingStatus::Closed);
        assert!(f.is_terminal());
    }

    #[test]
    fn test_assessment_finding_closes_as_resolved() {
        let mut f = assessment_finding();
        f.close(Some(Timestamp::parse("2026-02-01T00:00:00Z").unwrap()))
            .unwrap();
        assert_eq!(f.status, FindingStatus::Resolved);
    }

    #[test]
    fn test_close_directly_from_open() {
        let mut f = audit_finding();
        f.close(Some(Timestamp::parse("2026-02-01T00:00:00Z").unwrap()))
            .unwrap();
        assert_eq!(f.status, FindingStatus::Closed);
    }

    // ── Close-date invariant ────────────────────────────────────────

    #[test]
    fn test_close_without_date_fills_now() {
        let mut f = audit_finding();
        f.close(None).unwrap();
        let closed = f.closed_date.expect("close date must be filled");
        assert!(closed >= f.identified_date);
        assert!(f.is_terminal());
    }

    #[test]
    fn test_close_before_identified_rejected_without_mutation() {
        let mut f = audit_finding();
        let result = f.close(Some(Timestamp::parse("2025-12-01T00:00:00Z").unwrap()));
        assert!(matches!(
            result,
            Err(GrcError::Validation(ValidationError::InvalidField { .. }))
        ));
        // All-or-nothing: the record is untouched.
        assert_eq!(f.status, FindingStatus::Open);
        assert!(f.closed_date.is_none());
        assert!(f.transitions.is_empty());
    }

    #[test]
    fn test_close_on_identified_date_accepted() {
        let mut f = audit_finding();
        f.close(Some(f.identified_date)).unwrap();
        assert_eq!(f.closed_date, Some(f.identified_date));
    }

    // ── Invalid transitions ─────────────────────────────────────────

    #[test]
    fn test_wrong_terminal_label_rejected() {
        // An audit finding cannot become "Resolved" via edit.
        let mut f = audit_finding();
        let result = f.apply_edit(FindingEdit {
            status: Some(FindingStatus::Resolved),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(GrcError::Transition(TransitionError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_terminal_rejects_all_transitions() {
        let mut f = audit_finding();
        f.close(None).unwrap();
        assert!(matches!(
            f.start_progress(),
            Err(TransitionError::Terminal { .. })
        ));
        assert!(f.reopen().is_err());
        assert!(f.close(None).is_err());
    }

    #[test]
    fn test_reopen_from_open_rejected() {
        let mut f = audit_finding();
        let result = f.reopen();
        assert!(matches!(result, Err(TransitionError::Invalid { .. })));
    }

    // ── Edit boundary ───────────────────────────────────────────────

    #[test]
    fn test_edit_updates_fields() {
        let mut f = audit_finding();
        f.apply_edit(FindingEdit {
            title: Some("Access review gap (Q1)".into()),
            severity: Some(FindingSeverity::Critical),
            due_date: Some(Timestamp::parse("2026-03-01T00:00:00Z").unwrap()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(f.title, "Access review gap (Q1)");
        assert_eq!(f.severity, FindingSeverity::Critical);
        assert!(f.due_date.is_some());
        assert_eq!(f.status, FindingStatus::Open);
    }

    #[test]
    fn test_edit_close_fills_date() {
        let mut f = assessment_finding();
        f.apply_edit(FindingEdit {
            status: Some(FindingStatus::Resolved),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(f.status, FindingStatus::Resolved);
        assert!(f.closed_date.is_some());
    }

    #[test]
    fn test_edit_rejects_bad_close_date_atomically() {
        let mut f = assessment_finding();
        let result = f.apply_edit(FindingEdit {
            title: Some("New title".into()),
            status: Some(FindingStatus::Resolved),
            closed_date: Some(Timestamp::parse("2025-01-01T00:00:00Z").unwrap()),
            ..Default::default()
        });
        assert!(result.is_err());
        // The title edit must not have landed either.
        assert_eq!(f.title, "Policy out of date");
        assert_eq!(f.status, FindingStatus::Open);
    }

    #[test]
    fn test_edit_same_status_is_noop_transition() {
        let mut f = audit_finding();
        f.apply_edit(FindingEdit {
            status: Some(FindingStatus::Open),
            ..Default::default()
        })
        .unwrap();
        assert!(f.transitions.is_empty());
    }

    // ── Serialization ───────────────────────────────────────────────

    #[test]
    fn test_origin_serializes_as_entity_type_and_id() {
        let f = audit_finding();
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["origin"]["entityType"], "audit");
        assert!(json["origin"]["entityId"].is_string());
    }

    #[test]
    fn test_finding_serde_roundtrip() {
        let mut f = audit_finding();
        f.start_progress().unwrap();
        let json = serde_json::to_string(&f).unwrap();
        let parsed: Finding = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.status, f.status);
        assert_eq!(parsed.id, f.id);
        assert_eq!(parsed.transitions.len(), 1);
    }
}
