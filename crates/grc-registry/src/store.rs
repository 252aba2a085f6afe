//! # Per-Session Store
//!
//! The console kept its data in module-level mock arrays shared by every
//! component. The core replaces those with an explicit [`Store`] value:
//! each session constructs its own and passes it by reference into
//! whatever drives the core. No globals, no statics, one logical writer
//! at a time.

use serde::{Deserialize, Serialize};

use grc_core::{
    AuditId, CommitteeId, EntityKind, FilingId, InitiativeId, NotFoundError, RequirementId,
};
use grc_state::{Audit, Filing};

use crate::committee::Committee;
use crate::esg::EsgInitiative;
use crate::requirement::Requirement;

/// The top-level record collections for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Store {
    /// Regulatory requirements.
    pub requirements: Vec<Requirement>,
    /// Audit engagements.
    pub audits: Vec<Audit>,
    /// Governance committees.
    pub committees: Vec<Committee>,
    /// Regulatory filings.
    pub filings: Vec<Filing>,
    /// ESG initiatives.
    pub initiatives: Vec<EsgInitiative>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Requirements ────────────────────────────────────────────────

    /// Insert a requirement, returning its id.
    pub fn insert_requirement(&mut self, requirement: Requirement) -> RequirementId {
        let id = requirement.id;
        tracing::debug!(requirement = %id, "requirement inserted");
        self.requirements.push(requirement);
        id
    }

    /// Look up a requirement by id.
    pub fn requirement(&self, id: RequirementId) -> Result<&Requirement, NotFoundError> {
        self.requirements
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Requirement, id.to_string()))
    }

    /// Look up a requirement mutably by id.
    pub fn requirement_mut(
        &mut self,
        id: RequirementId,
    ) -> Result<&mut Requirement, NotFoundError> {
        self.requirements
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Requirement, id.to_string()))
    }

    /// Remove a requirement by id, returning it. Its children go with it.
    pub fn remove_requirement(&mut self, id: RequirementId) -> Result<Requirement, NotFoundError> {
        match self.requirements.iter().position(|r| r.id == id) {
            Some(idx) => {
                tracing::debug!(requirement = %id, "requirement removed");
                Ok(self.requirements.remove(idx))
            }
            None => Err(record_not_found(EntityKind::Requirement, id.to_string())),
        }
    }

    // ── Audits ──────────────────────────────────────────────────────

    /// Insert an audit, returning its id.
    pub fn insert_audit(&mut self, audit: Audit) -> AuditId {
        let id = audit.id;
        tracing::debug!(audit = %id, "audit inserted");
        self.audits.push(audit);
        id
    }

    /// Look up an audit by id.
    pub fn audit(&self, id: AuditId) -> Result<&Audit, NotFoundError> {
        self.audits
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Audit, id.to_string()))
    }

    /// Look up an audit mutably by id.
    pub fn audit_mut(&mut self, id: AuditId) -> Result<&mut Audit, NotFoundError> {
        self.audits
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Audit, id.to_string()))
    }

    /// Remove an audit by id, returning it.
    pub fn remove_audit(&mut self, id: AuditId) -> Result<Audit, NotFoundError> {
        match self.audits.iter().position(|a| a.id == id) {
            Some(idx) => Ok(self.audits.remove(idx)),
            None => Err(record_not_found(EntityKind::Audit, id.to_string())),
        }
    }

    // ── Committees ──────────────────────────────────────────────────

    /// Insert a committee, returning its id.
    pub fn insert_committee(&mut self, committee: Committee) -> CommitteeId {
        let id = committee.id;
        tracing::debug!(committee = %id, "committee inserted");
        self.committees.push(committee);
        id
    }

    /// Look up a committee by id.
    pub fn committee(&self, id: CommitteeId) -> Result<&Committee, NotFoundError> {
        self.committees
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Committee, id.to_string()))
    }

    /// Look up a committee mutably by id.
    pub fn committee_mut(&mut self, id: CommitteeId) -> Result<&mut Committee, NotFoundError> {
        self.committees
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Committee, id.to_string()))
    }

    /// Remove a committee by id, returning it.
    pub fn remove_committee(&mut self, id: CommitteeId) -> Result<Committee, NotFoundError> {
        match self.committees.iter().position(|c| c.id == id) {
            Some(idx) => Ok(self.committees.remove(idx)),
            None => Err(record_not_found(EntityKind::Committee, id.to_string())),
        }
    }

    // ── Filings ─────────────────────────────────────────────────────

    /// Insert a filing, returning its id.
    pub fn insert_filing(&mut self, filing: Filing) -> FilingId {
        let id = filing.id;
        tracing::debug!(filing = %id, "filing inserted");
        self.filings.push(filing);
        id
    }

    /// Look up a filing by id.
    pub fn filing(&self, id: FilingId) -> Result<&Filing, NotFoundError> {
        self.filings
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Filing, id.to_string()))
    }

    /// Look up a filing mutably by id.
    pub fn filing_mut(&mut self, id: FilingId) -> Result<&mut Filing, NotFoundError> {
        self.filings
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Filing, id.to_string()))
    }

    /// Remove a filing by id, returning it.
    pub fn remove_filing(&mut self, id: FilingId) -> Result<Filing, NotFoundError> {
        match self.filings.iter().position(|f| f.id == id) {
            Some(idx) => Ok(self.filings.remove(idx)),
            None => Err(record_not_found(EntityKind::Filing, id.to_string())),
        }
    }

    // ── Initiatives ─────────────────────────────────────────────────

    /// Insert an initiative, returning its id.
    pub fn insert_initiative(&mut self, initiative: EsgInitiative) -> InitiativeId {
        let id = initiative.id;
        tracing::debug!(initiative = %id, "initiative inserted");
        self.initiatives.push(initiative);
        id
    }

    /// Look up an initiative by id.
    pub fn initiative(&self, id: InitiativeId) -> Result<&EsgInitiative, NotFoundError> {
        self.initiatives
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Initiative, id.to_string()))
    }

    /// Look up an initiative mutably by id.
    pub fn initiative_mut(
        &mut self,
        id: InitiativeId,
    ) -> Result<&mut EsgInitiative, NotFoundError> {
        self.initiatives
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| record_not_found(EntityKind::Initiative, id.to_string()))
    }

    /// Remove an initiative by id, returning it.
    pub fn remove_initiative(
        &mut self,
        id: InitiativeId,
    ) -> Result<EsgInitiative, NotFoundError> {
        match self.initiatives.iter().position(|i| i.id == id) {
            Some(idx) => Ok(self.initiatives.remove(idx)),
            None => Err(record_not_found(EntityKind::Initiative, id.to_string())),
        }
    }
}

fn record_not_found(kind: EntityKind, id: String) -> NotFoundError {
    NotFoundError::Record { kind, id }
}

// ─── Tests ──────────────────────────────────────────────────────────
