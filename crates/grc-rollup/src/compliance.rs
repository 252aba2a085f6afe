//! # Compliance Rollups
//!
//! Compliance rate and the worst-of lattice rollup a requirement's
//! declared status is advisorily checked against.
//!
//! ## Advisory, Not Enforced
//!
//! The console has always let users declare `complianceStatus` on a
//! requirement independently of its children. [`consistency_notice`]
//! surfaces a disagreement between the declaration and the child rollup;
//! nothing here mutates the declared value. A declared status the data
//! does not support is a data-quality signal for the caller, not a
//! condition the core repairs.

use serde::{Deserialize, Serialize};

use grc_core::{is_overdue_at, ComplianceStatus, RequirementId, Timestamp};
use grc_registry::{Control, Obligation, Requirement};

use crate::aggregate::count_by;

/// Ratio of compliant obligations to all obligations, in `[0.0, 1.0]`.
///
/// Zero when the collection is empty — never NaN, never an error.
pub fn compliance_rate(obligations: &[Obligation]) -> f64 {
    if obligations.is_empty() {
        return 0.0;
    }
    let compliant = count_by(obligations, |o| o.status.is_compliant());
    compliant as f64 / obligations.len() as f64
}

/// Number of obligations past their due date and not yet compliant.
pub fn overdue_obligations(obligations: &[Obligation], now: Timestamp) -> usize {
    count_by(obligations, |o| {
        !o.status.is_compliant()
            && o.due_date.map(|due| is_overdue_at(due, now)).unwrap_or(false)
    })
}

/// The compliance status a requirement's children support, by lattice
/// meet over obligations and controls.
///
/// Control effectiveness maps onto the compliance lattice (Effective →
/// Compliant, Partially Effective → Partially Compliant, Ineffective →
/// Non-Compliant) and then everything folds with
/// [`ComplianceStatus::meet`]. `Not Applicable` is the fold's neutral
/// element, so it is also the answer when there is nothing to roll up.
pub fn expected_status(obligations: &[Obligation], controls: &[Control]) -> ComplianceStatus {
    let from_controls = controls.iter().map(|c| match c.effectiveness {
        grc_core::ControlEffectiveness::Effective => ComplianceStatus::Compliant,
        grc_core::ControlEffectiveness::PartiallyEffective => {
            ComplianceStatus::PartiallyCompliant
        }
        grc_core::ControlEffectiveness::Ineffective => ComplianceStatus::NonCompliant,
    });
    obligations
        .iter()
        .map(|o| o.status)
        .chain(from_controls)
        .fold(ComplianceStatus::NotApplicable, ComplianceStatus::meet)
}

/// A disagreement between a requirement's declared compliance status and
/// what its children support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyNotice {
    /// The requirement concerned.
    pub requirement_id: RequirementId,
    /// What the caller declared.
    pub declared: ComplianceStatus,
    /// What the child rollup supports.
    pub expected: ComplianceStatus,
}

/// Compare a requirement's declared compliance status with its child
/// rollup.
///
/// Returns `None` when they agree or when there are no applicable
/// children to compare against; `Some` notice otherwise. Advisory only.
pub fn consistency_notice(requirement: &Requirement) -> Option<ConsistencyNotice> {
    let expected = expected_status(&requirement.obligations, &requirement.controls);
    if expected == ComplianceStatus::NotApplicable || expected == requirement.compliance_status {
        return None;
    }
    Some(ConsistencyNotice {
        requirement_id: requirement.id,
        declared: requirement.compliance_status,
        expected,
    })
}
