//! # Status Enums — Single Source of Truth
//!
//! One closed enum per status family rendered by the console. These are THE
//! definitions used across the entire workspace; every `match` on them is
//! exhaustive, so adding a variant forces every consumer to handle it at
//! compile time.
//!
//! Wire labels match the console's record strings exactly (`"Partially
//! Compliant"`, `"Under Review"`, …). `as_str()`/`FromStr` round-trip
//! through those labels, and serde uses the same renames, so records are
//! JSON-compatible with the presentation layer.
//!
//! Lifecycle families additionally expose `is_terminal()` and
//! `valid_transitions()`; the state machines in `grc-state` consult these
//! rather than maintaining their own tables.

use serde::{Deserialize, Serialize};

use crate::error::ParseStatusError;

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// All variants in canonical order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// The console's wire label for this value.
            pub fn as_str(&self) -> &'static str {
                match self { $( Self::$variant => $label, )+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseStatusError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $label => Ok(Self::$variant), )+
                    other => Err(ParseStatusError {
                        family: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

// ─── Compliance Status ───────────────────────────────────────────────

status_enum! {
    /// Compliance posture of a requirement, obligation, or control rollup.
    ///
    /// Carries the worst-of lattice used by the rollup layer:
    /// `NonCompliant` is absorbing under [`ComplianceStatus::meet`] — any
    /// non-compliant child drags the aggregate down with it.
    ComplianceStatus {
        /// All duties satisfied.
        Compliant => "Compliant",
        /// Some duties satisfied, material gaps remain.
        PartiallyCompliant => "Partially Compliant",
        /// Duties not satisfied.
        NonCompliant => "Non-Compliant",
        /// The duty does not apply to this record.
        NotApplicable => "Not Applicable",
    }
}

impl ComplianceStatus {
    /// Lattice ordering value. Lower is worse (more restrictive).
    fn ordering(self) -> u8 {
        match self {
            Self::NonCompliant => 0,
            Self::PartiallyCompliant => 1,
            Self::Compliant => 2,
            Self::NotApplicable => 3,
        }
    }

    /// Lattice meet (greatest lower bound) — pessimistic composition.
    ///
    /// Returns the more restrictive of the two statuses. Used when ALL
    /// children must hold for the aggregate to hold.
    pub fn meet(self, other: Self) -> Self {
        if self.ordering() <= other.ordering() {
            self
        } else {
            other
        }
    }

    /// Whether this status counts toward a compliance rate numerator.
    pub fn is_compliant(self) -> bool {
        matches!(self, Self::Compliant)
    }

    /// Whether rollups should skip this value entirely.
    pub fn is_applicable(self) -> bool {
        !matches!(self, Self::NotApplicable)
    }
}

// ─── Risk Level ──────────────────────────────────────────────────────

/// Inherent risk level of a requirement.
///
/// Ordered: `Low < Medium < High < Critical`, so `max()` over a collection
/// yields the dominant risk.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// All levels, least severe first.
    pub fn all() -> &'static [RiskLevel] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// The console's wire label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            other => Err(ParseStatusError {
                family: "RiskLevel",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Finding Severity ────────────────────────────────────────────────

/// Severity of an audit or assessment finding.
///
/// Ordered like [`RiskLevel`]; severity rollups take the maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FindingSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FindingSeverity {
    /// All severities, least severe first.
    pub fn all() -> &'static [FindingSeverity] {
        &[Self::Low, Self::Medium, Self::High, Self::Critical]
    }

    /// The console's wire label for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for FindingSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FindingSeverity {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            other => Err(ParseStatusError {
                family: "FindingSeverity",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Requirement ─────────────────────────────────────────────────────

status_enum! {
    /// Editorial status of a regulatory requirement.
    ///
    /// Freely settable — the console imposes no transition order on
    /// requirement status, and neither does the core.
    RequirementStatus {
        Draft => "Draft",
        Active => "Active",
        UnderReview => "Under Review",
        Superseded => "Superseded",
        Archived => "Archived",
    }
}

status_enum! {
    /// Tested effectiveness of a control.
    ControlEffectiveness {
        Effective => "Effective",
        PartiallyEffective => "Partially Effective",
        Ineffective => "Ineffective",
    }
}

// ─── Assessment ──────────────────────────────────────────────────────

status_enum! {
    /// Progress of a compliance assessment.
    AssessmentStatus {
        Planned => "Planned",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

impl AssessmentStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// States reachable from this one.
    pub fn valid_transitions(&self) -> &'static [AssessmentStatus] {
        match self {
            Self::Planned => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }
}

// ─── Finding ─────────────────────────────────────────────────────────

status_enum! {
    /// Remediation status of a finding.
    ///
    /// `Resolved` and `Closed` are BOTH terminal and deliberately distinct:
    /// assessment findings have historically finished as "Resolved" while
    /// audit findings finish as "Closed". The two labels name the same
    /// concept in diverged record families and are kept apart until the
    /// business confirms a merge. Which terminal label a given finding may
    /// enter is decided by its origin (see `grc-state`).
    FindingStatus {
        Open => "Open",
        InProgress => "In Progress",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

impl FindingStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    /// States reachable from this one, before origin narrowing.
    ///
    /// Both terminal labels appear here; the finding record restricts the
    /// pair to the one matching its origin.
    pub fn valid_transitions(&self) -> &'static [FindingStatus] {
        match self {
            Self::Open => &[Self::InProgress, Self::Resolved, Self::Closed],
            Self::InProgress => &[Self::Open, Self::Resolved, Self::Closed],
            Self::Resolved | Self::Closed => &[],
        }
    }
}

// ─── Audit ───────────────────────────────────────────────────────────

status_enum! {
    /// Progress of an audit engagement.
    AuditStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Reviewed => "Reviewed",
    }
}

impl AuditStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Reviewed)
    }

    /// States reachable from this one.
    pub fn valid_transitions(&self) -> &'static [AuditStatus] {
        match self {
            Self::Scheduled => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[Self::Reviewed],
            Self::Reviewed => &[],
        }
    }
}

// ─── Committee & Meetings ────────────────────────────────────────────

status_enum! {
    /// Standing of a governance committee.
    CommitteeStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

status_enum! {
    /// Progress of a committee meeting.
    MeetingStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

impl MeetingStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// States reachable from this one.
    pub fn valid_transitions(&self) -> &'static [MeetingStatus] {
        match self {
            Self::Scheduled => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed],
            Self::Completed | Self::Cancelled => &[],
        }
    }
}

status_enum! {
    /// Attendance of one member at one meeting.
    ///
    /// Only `Present` counts toward quorum; `Late` and `Excused` are
    /// recorded but never satisfy the quorum threshold.
    AttendanceStatus {
        Present => "Present",
        Absent => "Absent",
        Late => "Late",
        Excused => "Excused",
    }
}

status_enum! {
    /// Progress of a meeting action item. Freely settable.
    ActionItemStatus {
        Open => "Open",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

// ─── Filing ──────────────────────────────────────────────────────────

status_enum! {
    /// Lifecycle status of a regulatory filing.
    ///
    /// The rejection loop (`Rejected → Amended → Pending Review`) allows
    /// resubmission; `Accepted` is the only terminal state.
    FilingStatus {
        Draft => "Draft",
        PendingReview => "Pending Review",
        Submitted => "Submitted",
        Accepted => "Accepted",
        Rejected => "Rejected",
        Amended => "Amended",
    }
}

impl FilingStatus {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// States reachable from this one.
    pub fn valid_transitions(&self) -> &'static [FilingStatus] {
        match self {
            Self::Draft => &[Self::PendingReview],
            Self::PendingReview => &[Self::Submitted],
            Self::Submitted => &[Self::Accepted, Self::Rejected],
            Self::Rejected => &[Self::Amended],
            Self::Amended => &[Self::PendingReview],
            Self::Accepted => &[],
        }
    }
}

// ─── ESG ─────────────────────────────────────────────────────────────

status_enum! {
    /// Tracking posture of an ESG initiative or metric. Freely settable.
    TrackingStatus {
        NotStarted => "Not Started",
        OnTrack => "On Track",
        AtRisk => "At Risk",
        OffTrack => "Off Track",
        Completed => "Completed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_roundtrip() {
        for s in ComplianceStatus::all() {
            assert_eq!(s.as_str().parse::<ComplianceStatus>().unwrap(), *s);
        }
        for s in FilingStatus::all() {
            assert_eq!(s.as_str().parse::<FilingStatus>().unwrap(), *s);
        }
        for s in FindingStatus::all() {
            assert_eq!(s.as_str().parse::<FindingStatus>().unwrap(), *s);
        }
        for s in TrackingStatus::all() {
            assert_eq!(s.as_str().parse::<TrackingStatus>().unwrap(), *s);
        }
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&ComplianceStatus::PartiallyCompliant).unwrap();
        assert_eq!(json, "\"Partially Compliant\"");
        let json = serde_json::to_string(&FilingStatus::PendingReview).unwrap();
        assert_eq!(json, "\"Pending Review\"");
        let parsed: RequirementStatus = serde_json::from_str("\"Under Review\"").unwrap();
        assert_eq!(parsed, RequirementStatus::UnderReview);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("Compliantish".parse::<ComplianceStatus>().is_err());
        assert!("".parse::<FilingStatus>().is_err());
        // Case-sensitive: wire labels are exact.
        assert!("compliant".parse::<ComplianceStatus>().is_err());
    }

    #[test]
    fn test_meet_is_pessimistic() {
        use ComplianceStatus::*;
        assert_eq!(Compliant.meet(NonCompliant), NonCompliant);
        assert_eq!(PartiallyCompliant.meet(Compliant), PartiallyCompliant);
        assert_eq!(NotApplicable.meet(Compliant), Compliant);
        assert_eq!(NotApplicable.meet(NotApplicable), NotApplicable);
    }

    #[test]
    fn test_applicability() {
        assert!(ComplianceStatus::Compliant.is_applicable());
        assert!(!ComplianceStatus::NotApplicable.is_applicable());
        assert!(ComplianceStatus::Compliant.is_compliant());
        assert!(!ComplianceStatus::PartiallyCompliant.is_compliant());
    }

    #[test]
    fn test_meet_commutative() {
        for a in ComplianceStatus::all() {
            for b in ComplianceStatus::all() {
                assert_eq!(a.meet(*b), b.meet(*a));
            }
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(FindingSeverity::Low < FindingSeverity::Critical);
        assert!(RiskLevel::Medium < RiskLevel::High);
        assert_eq!(
            FindingSeverity::all().iter().max(),
            Some(&FindingSeverity::Critical)
        );
    }

    #[test]
    fn test_terminal_states() {
        assert!(FindingStatus::Resolved.is_terminal());
        assert!(FindingStatus::Closed.is_terminal());
        assert!(!FindingStatus::Open.is_terminal());
        assert!(FilingStatus::Accepted.is_terminal());
        assert!(!FilingStatus::Rejected.is_terminal());
        assert!(MeetingStatus::Cancelled.is_terminal());
        assert!(AuditStatus::Reviewed.is_terminal());
    }

    #[test]
    fn test_terminal_states_have_no_transitions() {
        for s in FilingStatus::all() {
            assert_eq!(s.is_terminal(), s.valid_transitions().is_empty());
        }
        for s in MeetingStatus::all() {
            assert_eq!(s.is_terminal(), s.valid_transitions().is_empty());
        }
        for s in FindingStatus::all() {
            assert_eq!(s.is_terminal(), s.valid_transitions().is_empty());
        }
        for s in AuditStatus::all() {
            assert_eq!(s.is_terminal(), s.valid_transitions().is_empty());
        }
        for s in AssessmentStatus::all() {
            assert_eq!(s.is_terminal(), s.valid_transitions().is_empty());
        }
    }

    #[test]
    fn test_filing_resubmission_loop() {
        use FilingStatus::*;
        assert!(Rejected.valid_transitions().contains(&Amended));
        assert!(Amended.valid_transitions().contains(&PendingReview));
        assert!(PendingReview.valid_transitions().contains(&Submitted));
    }
}
