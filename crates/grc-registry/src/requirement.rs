//! # Regulatory Requirements and Their Children
//!
//! A requirement owns obligations (recurring duties), controls
//! (safeguards with a testing cadence), assessments, and documents.
//!
//! ## Advisory Compliance Status
//!
//! `Requirement.compliance_status` is declared by the caller, not derived:
//! the console has always let users set it independently of the child
//! rollup, and this core preserves that. The rollup layer reports a
//! consistency notice when the declared value disagrees with the
//! children, but nothing here ever auto-corrects it.

use serde::{Deserialize, Serialize};

use grc_core::{
    ComplianceStatus, ControlEffectiveness, ControlId, DocumentId, EntityKind, NotFoundError,
    ObligationId, RequirementId, RequirementStatus, RiskLevel, Timestamp, ValidationError,
};
use grc_state::Assessment;

// ─── Obligation ─────────────────────────────────────────────────────

/// A recurring or one-time compliance duty tied to a requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obligation {
    /// Unique obligation identifier.
    pub id: ObligationId,
    /// The owning requirement; stamped on attach.
    pub requirement_id: RequirementId,
    /// What the duty is.
    pub description: String,
    /// Compliance posture. Freely settable.
    pub status: ComplianceStatus,
    /// When the duty falls due, if dated.
    pub due_date: Option<Timestamp>,
}

impl Obligation {
    /// Create a new obligation. The requirement id is re-stamped on attach.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty description.
    pub fn new(
        requirement_id: RequirementId,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Obligation,
                field: "description",
            });
        }
        Ok(Self {
            id: ObligationId::new(),
            requirement_id,
            description,
            status: ComplianceStatus::NotApplicable,
            due_date: None,
        })
    }

    /// Set the compliance posture. No transition order is enforced.
    pub fn set_status(&mut self, status: ComplianceStatus) {
        self.status = status;
    }
}

// ─── Control ────────────────────────────────────────────────────────

/// A safeguard implemented to satisfy a requirement, with its own
/// effectiveness and testing cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Unique control identifier.
    pub id: ControlId,
    /// The owning requirement; stamped on attach.
    pub requirement_id: RequirementId,
    /// Control name.
    pub name: String,
    /// Effectiveness as last tested.
    pub effectiveness: ControlEffectiveness,
    /// When the control was last tested.
    pub last_tested_date: Option<Timestamp>,
    /// When the next test is due.
    pub next_test_date: Option<Timestamp>,
}

impl Control {
    /// Create a new untested control. The requirement id is re-stamped on
    /// attach.
    pub fn new(
        requirement_id: RequirementId,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Control,
                field: "name",
            });
        }
        Ok(Self {
            id: ControlId::new(),
            requirement_id,
            name,
            effectiveness: ControlEffectiveness::Ineffective,
            last_tested_date: None,
            next_test_date: None,
        })
    }

    /// Record a test result and the next test date.
    pub fn record_test(
        &mut self,
        tested_at: Timestamp,
        effectiveness: ControlEffectiveness,
        next_test_date: Option<Timestamp>,
    ) {
        self.last_tested_date = Some(tested_at);
        self.effectiveness = effectiveness;
        self.next_test_date = next_test_date;
    }
}

// ─── Document ───────────────────────────────────────────────────────

/// A document attached to a requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementDocument {
    /// Unique document identifier.
    pub id: DocumentId,
    /// File name as uploaded.
    pub name: String,
    /// When the document was attached.
    pub uploaded_at: Timestamp,
}

// ─── Requirement ────────────────────────────────────────────────────

/// A regulatory requirement and the records it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique requirement identifier.
    pub id: RequirementId,
    /// Requirement title.
    pub title: String,
    /// Editorial status. Freely settable.
    pub status: RequirementStatus,
    /// Inherent risk level.
    pub risk_level: RiskLevel,
    /// Declared compliance posture. Advisory against the child rollup.
    pub compliance_status: ComplianceStatus,
    /// When the next review falls due.
    pub next_review_date: Option<Timestamp>,
    /// Owned obligations.
    pub obligations: Vec<Obligation>,
    /// Owned controls.
    pub controls: Vec<Control>,
    /// Owned assessments.
    pub assessments: Vec<Assessment>,
    /// Attached documents.
    pub documents: Vec<RequirementDocument>,
}

impl Requirement {
    /// Create a new draft requirement.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title.
    pub fn new(
        title: impl Into<String>,
        risk_level: RiskLevel,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Requirement,
                field: "title",
            });
        }
        Ok(Self {
            id: RequirementId::new(),
            title,
            status: RequirementStatus::Draft,
            risk_level,
            compliance_status: ComplianceStatus::NotApplicable,
            next_review_date: None,
            obligations: Vec::new(),
            controls: Vec::new(),
            assessments: Vec::new(),
            documents: Vec::new(),
        })
    }

    /// Set the editorial status. No transition order is enforced.
    pub fn set_status(&mut self, status: RequirementStatus) {
        self.status = status;
    }

    /// Declare the compliance posture.
    ///
    /// Advisory only — the declared value may disagree with the child
    /// rollup, and the core reports rather than repairs that.
    pub fn set_compliance_status(&mut self, status: ComplianceStatus) {
        tracing::debug!(requirement = %self.id, status = %status, "compliance status declared");
        self.compliance_status = status;
    }

    // ── Obligations ─────────────────────────────────────────────────

    /// Attach an obligation, stamping its requirement id.
    pub fn attach_obligation(&mut self, mut obligation: Obligation) -> ObligationId {
        obligation.requirement_id = self.id;
        let id = obligation.id;
        tracing::debug!(requirement = %self.id, obligation = %id, "obligation attached");
        self.obligations.push(obligation);
        id
    }

    /// Detach an obligation by id, returning it.
    pub fn detach_obligation(&mut self, id: ObligationId) -> Result<Obligation, NotFoundError> {
        match self.obligations.iter().position(|o| o.id == id) {
            Some(idx) => Ok(self.obligations.remove(idx)),
            None => Err(self.child_not_found(EntityKind::Obligation, id.to_string())),
        }
    }

    /// Look up an obligation mutably by id.
    pub fn obligation_mut(&mut self, id: ObligationId) -> Option<&mut Obligation> {
        self.obligations.iter_mut().find(|o| o.id == id)
    }

    // ── Controls ────────────────────────────────────────────────────

    /// Attach a control, stamping its requirement id.
    pub fn attach_control(&mut self, mut control: Control) -> ControlId {
        control.requirement_id = self.id;
        let id = control.id;
        tracing::debug!(requirement = %self.id, control = %id, "control attached");
        self.controls.push(control);
        id
    }

    /// Detach a control by id, returning it.
    pub fn detach_control(&mut self, id: ControlId) -> Result<Control, NotFoundError> {
        match self.controls.iter().position(|c| c.id == id) {
            Some(idx) => Ok(self.controls.remove(idx)),
            None => Err(self.child_not_found(EntityKind::Control, id.to_string())),
        }
    }

    /// Look up a control mutably by id.
    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|c| c.id == id)
    }

    // ── Assessments ─────────────────────────────────────────────────

    /// Attach an assessment, stamping its requirement id.
    pub fn attach_assessment(&mut self, mut assessment: Assessment) -> grc_core::AssessmentId {
        assessment.requirement_id = self.id;
        let id = assessment.id;
        tracing::debug!(requirement = %self.id, assessment = %id, "assessment attached");
        self.assessments.push(assessment);
        id
    }

    /// Detach an assessment by id, returning it.
    pub fn detach_assessment(
        &mut self,
        id: grc_core::AssessmentId,
    ) -> Result<Assessment, NotFoundError> {
        match self.assessments.iter().position(|a| a.id == id) {
            Some(idx) => Ok(self.assessments.remove(idx)),
            None => Err(self.child_not_found(EntityKind::Assessment, id.to_string())),
        }
    }

    /// Look up an assessment mutably by id.
    pub fn assessment_mut(&mut self, id: grc_core::AssessmentId) -> Option<&mut Assessment> {
        self.assessments.iter_mut().find(|a| a.id == id)
    }

    // ── Documents ───────────────────────────────────────────────────

    /// Attach a document.
    pub fn attach_document(&mut self, name: impl Into<String>) -> DocumentId {
        let doc = RequirementDocument {
            id: DocumentId::new(),
            name: name.into(),
            uploaded_at: Timestamp::now(),
        };
        let id = doc.id;
        self.documents.push(doc);
        id
    }

    /// Detach a document by id, returning it.
    pub fn detach_document(
        &mut self,
        id: DocumentId,
    ) -> Result<RequirementDocument, NotFoundError> {
        match self.documents.iter().position(|d| d.id == id) {
            Some(idx) => Ok(self.documents.remove(idx)),
            None => Err(self.child_not_found(EntityKind::Document, id.to_string())),
        }
    }

    fn child_not_found(&self, kind: EntityKind, id: String) -> NotFoundError {
        NotFoundError::Child {
            kind,
            id,
            parent_kind: EntityKind::Requirement,
            parent_id: self.id.to_string(),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
