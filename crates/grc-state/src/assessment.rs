//! # Assessment Lifecycle State Machine
//!
//! Models a compliance assessment performed against a requirement.
//!
//! ## States
//!
//! ```text
//! Planned ──▶ In Progress ──▶ Completed (terminal)
//! ```
//!
//! An assessment owns its findings; assessment findings finish in the
//! "Resolved" terminal label.

use serde::{Deserialize, Serialize};

use grc_core::{
    AssessmentId, AssessmentStatus, EntityKind, FindingId, NotFoundError, RequirementId,
    Timestamp, TransitionError, ValidationError,
};

use crate::finding::{Finding, FindingOrigin};

/// Record of an assessment state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentTransitionRecord {
    /// State before the transition.
    pub from_status: AssessmentStatus,
    /// State after the transition.
    pub to_status: AssessmentStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

/// A compliance assessment with its lifecycle state and owned findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Unique assessment identifier.
    pub id: AssessmentId,
    /// The requirement being assessed.
    pub requirement_id: RequirementId,
    /// Assessment title.
    pub title: String,
    /// Current lifecycle state.
    pub status: AssessmentStatus,
    /// Findings raised by this assessment. Array membership is ownership.
    pub findings: Vec<Finding>,
    /// Ordered log of all state transitions.
    pub transitions: Vec<AssessmentTransitionRecord>,
}

impl Assessment {
    /// Create a new planned assessment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title.
    pub fn new(
        requirement_id: RequirementId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Assessment,
                field: "title",
            });
        }
        Ok(Self {
            id: AssessmentId::new(),
            requirement_id,
            title,
            status: AssessmentStatus::Planned,
            findings: Vec::new(),
            transitions: Vec::new(),
        })
    }

    /// Begin the assessment (Planned → In Progress).
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.require_transition(AssessmentStatus::InProgress)?;
        self.do_transition(AssessmentStatus::InProgress);
        Ok(())
    }

    /// Complete the assessment (In Progress → Completed).
    ///
    /// Open findings are allowed to outlive completion; remediation
    /// continues on the finding's own lifecycle.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        self.require_transition(AssessmentStatus::Completed)?;
        self.do_transition(AssessmentStatus::Completed);
        Ok(())
    }

    /// Whether the assessment is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ── Finding ownership ───────────────────────────────────────────

    /// Attach a finding, stamping its origin with this assessment's id.
    pub fn attach_finding(&mut self, mut finding: Finding) -> FindingId {
        finding.origin = FindingOrigin::Assessment(self.id);
        let id = finding.id;
        tracing::debug!(assessment = %self.id, finding = %id, "finding attached");
        self.findings.push(finding);
        id
    }

    /// Detach a finding by id, returning it.
    pub fn detach_finding(&mut self, id: FindingId) -> Result<Finding, NotFoundError> {
        match self.findings.iter().position(|f| f.id == id) {
            Some(idx) => Ok(self.findings.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Finding,
                id: id.to_string(),
                parent_kind: EntityKind::Assessment,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Look up an owned finding mutably by id.
    pub fn finding_mut(&mut self, id: FindingId) -> Option<&mut Finding> {
        self.findings.iter_mut().find(|f| f.id == id)
    }

    fn require_transition(&self, to: AssessmentStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::Terminal {
                kind: EntityKind::Assessment,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        if !self.status.valid_transitions().contains(&to) {
            tracing::warn!(assessment = %self.id, from = %self.status, to = %to, "invalid transition rejected");
            return Err(TransitionError::Invalid {
                kind: EntityKind::Assessment,
                id: self.id.to_string(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    fn do_transition(&mut self, to: AssessmentStatus) {
        tracing::debug!(assessment = %self.id, from = %self.status, to = %to, "assessment transition");
        self.transitions.push(AssessmentTransitionRecord {
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
    use grc_core::{FindingSeverity, FindingStatus};

    fn make_assessment() -> Assessment {
        Assessment::new(RequirementId::new(), "Annual GDPR assessment").unwrap()
    }

    #[test]
    fn test_full_lifecycle() {
        let mut a = make_assessment();
        a.begin().unwrap();
        a.complete().unwrap();
        assert!(a.is_terminal());
        assert_eq!(a.transitions.len(), 2);
    }

    #[test]
    fn test_cannot_complete_from_planned() {
        let mut a = make_assessment();
        assert!(matches!(a.complete(), Err(TransitionError::Invalid { .. })));
    }

    #[test]
    fn test_completed_is_terminal() {
        let mut a = make_assessment();
        a.begin().unwrap();
        a.complete().unwrap();
        assert!(matches!(a.begin(), Err(TransitionError::Terminal { .. })));
    }

    #[test]
    fn test_attached_finding_resolves() {
        let mut a = make_assessment();
        let finding = Finding::new(
            "Records of processing incomplete",
            FindingSeverity::Medium,
            FindingOrigin::Assessment(AssessmentId::new()),
            Timestamp::parse("2026-04-01T00:00:00Z").unwrap(),
        )
        .unwrap();
        let id = a.attach_finding(finding);
        assert_eq!(
            a.findings[0].origin,
            FindingOrigin::Assessment(a.id)
        );
        let f = a.finding_mut(id).unwrap();
        f.close(None).unwrap();
        assert_eq!(f.status, FindingStatus::Resolved);
    }

    #[test]
    fn test_detach_missing_is_not_found() {
        let mut a = make_assessment();
        assert!(matches!(
            a.detach_finding(FindingId::new()),
            Err(NotFoundError::Child { .. })
        ));
    }
}
