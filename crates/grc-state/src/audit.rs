//! # Audit Lifecycle State Machine
//!
//! Models an audit engagement and the findings it raises.
//!
//! ## States
//!
//! ```text
//! Scheduled ──▶ In Progress ──▶ Completed ──▶ Reviewed (terminal)
//! ```
//!
//! An audit owns its findings: attaching one stamps the finding's origin
//! with this audit's id, and audit findings finish in the "Closed"
//! terminal label.

use serde::{Deserialize, Serialize};

use grc_core::{
    AuditId, AuditStatus, EntityKind, FindingId, NotFoundError, Timestamp, TransitionError,
    ValidationError,
};

use crate::finding::{Finding, FindingOrigin};

/// Record of an audit state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTransitionRecord {
    /// State before the transition.
    pub from_status: AuditStatus,
    /// State after the transition.
    pub to_status: AuditStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

/// An audit engagement with its lifecycle state and owned findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    /// Unique audit identifier.
    pub id: AuditId,
    /// Engagement title.
    pub title: String,
    /// Current lifecycle state.
    pub status: AuditStatus,
    /// Scheduled or actual start of fieldwork.
    pub start_date: Timestamp,
    /// End of fieldwork, once known.
    pub end_date: Option<Timestamp>,
    /// Findings raised by this audit. Array membership is ownership.
    pub findings: Vec<Finding>,
    /// Ordered log of all state transitions.
    pub transitions: Vec<AuditTransitionRecord>,
}

impl Audit {
    /// Create a new scheduled audit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title.
    pub fn new(title: impl Into<String>, start_date: Timestamp) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Audit,
                field: "title",
            });
        }
        Ok(Self {
            id: AuditId::new(),
            title,
            status: AuditStatus::Scheduled,
            start_date,
            end_date: None,
            findings: Vec::new(),
            transitions: Vec::new(),
        })
    }

    /// Begin fieldwork (Scheduled → In Progress).
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.require_transition(AuditStatus::InProgress)?;
        self.do_transition(AuditStatus::InProgress);
        Ok(())
    }

    /// Complete fieldwork (In Progress → Completed), recording the end date.
    pub fn complete(&mut self, end_date: Timestamp) -> Result<(), TransitionError> {
        self.require_transition(AuditStatus::Completed)?;
        self.end_date = Some(end_date);
        self.do_transition(AuditStatus::Completed);
        Ok(())
    }

    /// Sign off the completed audit (Completed → Reviewed).
    pub fn review(&mut self) -> Result<(), TransitionError> {
        self.require_transition(AuditStatus::Reviewed)?;
        self.do_transition(AuditStatus::Reviewed);
        Ok(())
    }

    /// Whether the audit is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ── Finding ownership ───────────────────────────────────────────

    /// Attach a finding to this audit.
    ///
    /// The finding's origin is stamped with this audit's id — identifier
    /// assignment cascades from the parent, never the caller.
    pub fn attach_finding(&mut self, mut finding: Finding) -> FindingId {
        finding.origin = FindingOrigin::Audit(self.id);
        let id = finding.id;
        tracing::debug!(audit = %self.id, finding = %id, "finding attached");
        self.findings.push(finding);
        id
    }

    /// Detach a finding by id, returning it.
    ///
    /// Detachment removes ownership only; the audit's transition log is
    /// never rewritten.
    pub fn detach_finding(&mut self, id: FindingId) -> Result<Finding, NotFoundError> {
        match self.findings.iter().position(|f| f.id == id) {
            Some(idx) => {
                tracing::debug!(audit = %self.id, finding = %id, "finding detached");
                Ok(self.findings.remove(idx))
            }
            None => Err(NotFoundError::Child {
                kind: EntityKind::Finding,
                id: id.to_string(),
                parent_kind: EntityKind::Audit,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Look up an owned finding by id.
    pub fn finding(&self, id: FindingId) -> Option<&Finding> {
        self.findings.iter().find(|f| f.id == id)
    }

    /// Look up an owned finding mutably by id.
    pub fn finding_mut(&mut self, id: FindingId) -> Option<&mut Finding> {
        self.findings.iter_mut().find(|f| f.id == id)
    }

    fn require_transition(&self, to: AuditStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::Terminal {
                kind: EntityKind::Audit,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        if !self.status.valid_transitions().contains(&to) {
            tracing::warn!(audit = %self.id, from = %self.status, to = %to, "invalid transition rejected");
            return Err(TransitionError::Invalid {
                kind: EntityKind::Audit,
                id: self.id.to_string(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    fn do_transition(&mut self, to: AuditStatus) {
        tracing::debug!(audit = %self.id, from = %self.status, to = %to, "audit transition");
        self.transitions.push(AuditTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
        });
        self.status = to;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
