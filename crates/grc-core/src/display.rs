//! # Display Classification
//!
//! Maps status values to the display category a badge or style is chosen
//! from. This is a pure function contract — the core knows the categories,
//! not the styling.
//!
//! ## Typed Mapping Tables
//!
//! Classification is an exhaustive `match` per closed status enum (the
//! [`Badge`] trait). There are no string-keyed lookup tables to fall out of
//! sync with the enums; adding a variant is a compile error until its
//! category is chosen.
//!
//! ## Default-to-Secondary
//!
//! The presentation layer must never crash on an unrecognized legacy status
//! string. [`classify`] parses the raw value at the string boundary and
//! returns [`DisplayCategory::Secondary`] for anything outside the
//! enumerated set. This is a contract, not an accident: unknown means
//! unclassified, not an error.

use serde::{Deserialize, Serialize};

use crate::status::{
    ActionItemStatus, AssessmentStatus, AttendanceStatus, AuditStatus, CommitteeStatus,
    ComplianceStatus, ControlEffectiveness, FilingStatus, FindingSeverity, FindingStatus,
    MeetingStatus, RequirementStatus, RiskLevel, TrackingStatus,
};

/// The display categories a badge is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Info,
    Primary,
    Success,
    Warning,
    Danger,
    /// Neutral/unclassified. Also the fallback for unknown values.
    Secondary,
}

/// A status value that maps to a display category.
pub trait Badge {
    /// The display category for this value.
    fn badge(&self) -> DisplayCategory;
}

impl Badge for ComplianceStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Compliant => DisplayCategory::Success,
            Self::PartiallyCompliant => DisplayCategory::Warning,
            Self::NonCompliant => DisplayCategory::Danger,
            Self::NotApplicable => DisplayCategory::Secondary,
        }
    }
}

impl Badge for RiskLevel {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Low => DisplayCategory::Info,
            Self::Medium => DisplayCategory::Warning,
            Self::High | Self::Critical => DisplayCategory::Danger,
        }
    }
}

impl Badge for FindingSeverity {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Low => DisplayCategory::Info,
            Self::Medium => DisplayCategory::Warning,
            Self::High | Self::Critical => DisplayCategory::Danger,
        }
    }
}

impl Badge for RequirementStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Draft => DisplayCategory::Secondary,
            Self::Active => DisplayCategory::Success,
            Self::UnderReview => DisplayCategory::Warning,
            Self::Superseded => DisplayCategory::Info,
            Self::Archived => DisplayCategory::Secondary,
        }
    }
}

impl Badge for ControlEffectiveness {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Effective => DisplayCategory::Success,
            Self::PartiallyEffective => DisplayCategory::Warning,
            Self::Ineffective => DisplayCategory::Danger,
        }
    }
}

impl Badge for AssessmentStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Planned => DisplayCategory::Info,
            Self::InProgress => DisplayCategory::Primary,
            Self::Completed => DisplayCategory::Success,
        }
    }
}

impl Badge for FindingStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Open => DisplayCategory::Warning,
            Self::InProgress => DisplayCategory::Primary,
            Self::Resolved | Self::Closed => DisplayCategory::Success,
        }
    }
}

impl Badge for AuditStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Scheduled => DisplayCategory::Info,
            Self::InProgress => DisplayCategory::Primary,
            Self::Completed => DisplayCategory::Success,
            Self::Reviewed => DisplayCategory::Secondary,
        }
    }
}

impl Badge for CommitteeStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Active => DisplayCategory::Success,
            Self::Inactive => DisplayCategory::Secondary,
        }
    }
}

impl Badge for MeetingStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Scheduled => DisplayCategory::Info,
            Self::InProgress => DisplayCategory::Primary,
            Self::Completed => DisplayCategory::Success,
            Self::Cancelled => DisplayCategory::Secondary,
        }
    }
}

impl Badge for AttendanceStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Present => DisplayCategory::Success,
            Self::Absent => DisplayCategory::Danger,
            Self::Late => DisplayCategory::Warning,
            Self::Excused => DisplayCategory::Info,
        }
    }
}

impl Badge for ActionItemStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Open => DisplayCategory::Warning,
            Self::InProgress => DisplayCategory::Primary,
            Self::Completed => DisplayCategory::Success,
        }
    }
}

impl Badge for FilingStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::Draft => DisplayCategory::Secondary,
            Self::PendingReview => DisplayCategory::Warning,
            Self::Submitted => DisplayCategory::Primary,
            Self::Accepted => DisplayCategory::Success,
            Self::Rejected => DisplayCategory::Danger,
            Self::Amended => DisplayCategory::Info,
        }
    }
}

impl Badge for TrackingStatus {
    fn badge(&self) -> DisplayCategory {
        match self {
            Self::NotStarted => DisplayCategory::Secondary,
            Self::OnTrack => DisplayCategory::Success,
            Self::AtRisk => DisplayCategory::Warning,
            Self::OffTrack => DisplayCategory::Danger,
            Self::Completed => DisplayCategory::Primary,
        }
    }
}

/// The status families the string boundary can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    Compliance,
    Risk,
    Requirement,
    ControlEffectiveness,
    Assessment,
    FindingSeverity,
    FindingStatus,
    Audit,
    Committee,
    Meeting,
    Attendance,
    ActionItem,
    Filing,
    Tracking,
}

/// Classify a raw status string from the presentation layer.
///
/// Parses `raw` against the named family and returns its display category;
/// any value outside the enumerated set maps to
/// [`DisplayCategory::Secondary`]. Never fails, never panics — the UI must
/// not crash on a legacy value.
pub fn classify(kind: StatusKind, raw: &str) -> DisplayCategory {
    fn parsed<T>(raw: &str) -> DisplayCategory
    where
        T: std::str::FromStr + Badge,
    {
        raw.parse::<T>()
            .map(|s| s.badge())
            .unwrap_or(DisplayCategory::Secondary)
    }

    match kind {
        StatusKind::Compliance => parsed::<ComplianceStatus>(raw),
        StatusKind::Risk => parsed::<RiskLevel>(raw),
        StatusKind::Requirement => parsed::<RequirementStatus>(raw),
        StatusKind::ControlEffectiveness => parsed::<ControlEffectiveness>(raw),
        StatusKind::Assessment => parsed::<AssessmentStatus>(raw),
        StatusKind::FindingSeverity => parsed::<FindingSeverity>(raw),
        StatusKind::FindingStatus => parsed::<FindingStatus>(raw),
        StatusKind::Audit => parsed::<AuditStatus>(raw),
        StatusKind::Committee => parsed::<CommitteeStatus>(raw),
        StatusKind::Meeting => parsed::<MeetingStatus>(raw),
        StatusKind::Attendance => parsed::<AttendanceStatus>(raw),
        StatusKind::ActionItem => parsed::<ActionItemStatus>(raw),
        StatusKind::Filing => parsed::<FilingStatus>(raw),
        StatusKind::Tracking => parsed::<TrackingStatus>(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_table() {
        assert_eq!(FindingSeverity::Critical.badge(), DisplayCategory::Danger);
        assert_eq!(FindingSeverity::High.badge(), DisplayCategory::Danger);
        assert_eq!(FindingSeverity::Medium.badge(), DisplayCategory::Warning);
        assert_eq!(FindingSeverity::Low.badge(), DisplayCategory::Info);
    }

    #[test]
    fn test_lifecycle_tables() {
        assert_eq!(AuditStatus::Completed.badge(), DisplayCategory::Success);
        assert_eq!(FilingStatus::Rejected.badge(), DisplayCategory::Danger);
        assert_eq!(MeetingStatus::Cancelled.badge(), DisplayCategory::Secondary);
        assert_eq!(
            ComplianceStatus::NonCompliant.badge(),
            DisplayCategory::Danger
        );
    }

    #[test]
    fn test_classify_known_values() {
        assert_eq!(
            classify(StatusKind::Filing, "Pending Review"),
            DisplayCategory::Warning
        );
        assert_eq!(
            classify(StatusKind::FindingSeverity, "Critical"),
            DisplayCategory::Danger
        );
        assert_eq!(
            classify(StatusKind::Attendance, "Present"),
            DisplayCategory::Success
        );
    }

    #[test]
    fn test_classify_unknown_defaults_to_secondary() {
        // Legacy values must map to Secondary, never crash or error.
        assert_eq!(
            classify(StatusKind::Filing, "Awaiting Signature"),
            DisplayCategory::Secondary
        );
        assert_eq!(
            classify(StatusKind::Compliance, ""),
            DisplayCategory::Secondary
        );
        assert_eq!(
            classify(StatusKind::Meeting, "POSTPONED"),
            DisplayCategory::Secondary
        );
    }

    #[test]
    fn test_both_terminal_finding_labels_classify_alike() {
        assert_eq!(
            classify(StatusKind::FindingStatus, "Resolved"),
            classify(StatusKind::FindingStatus, "Closed")
        );
    }
}
