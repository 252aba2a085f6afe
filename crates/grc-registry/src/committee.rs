//! # Governance Committees
//!
//! A committee owns its members and its meetings. Meetings carry their
//! own lifecycle (see `grc-state`); the committee is the container that
//! stamps their back-reference and provides the member roster quorum is
//! computed against.

use serde::{Deserialize, Serialize};

use grc_core::{
    days_between, format_duration, CommitteeId, CommitteeStatus, EntityKind, MeetingId, MemberId,
    NotFoundError, Timestamp, ValidationError,
};
use grc_state::CommitteeMeeting;

/// A member of a governance committee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeMember {
    /// Unique member identifier.
    pub id: MemberId,
    /// Member name.
    pub name: String,
    /// Role on the committee (e.g. "Chair", "Secretary").
    pub role: String,
    /// When the member joined.
    pub joined_date: Timestamp,
}

impl CommitteeMember {
    /// Create a new member.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        joined_date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Member,
                field: "name",
            });
        }
        Ok(Self {
            id: MemberId::new(),
            name,
            role: role.into(),
            joined_date,
        })
    }

    /// Tenure on the committee as of `now`, formatted for display.
    pub fn tenure_at(&self, now: Timestamp) -> String {
        format_duration(days_between(self.joined_date, now))
    }
}

/// A governance committee with its roster and meetings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    /// Unique committee identifier.
    pub id: CommitteeId,
    /// Committee name.
    pub name: String,
    /// Standing. Freely settable.
    pub status: CommitteeStatus,
    /// Member roster.
    pub members: Vec<CommitteeMember>,
    /// Owned meetings.
    pub meetings: Vec<CommitteeMeeting>,
}

impl Committee {
    /// Create a new active committee.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Committee,
                field: "name",
            });
        }
        Ok(Self {
            id: CommitteeId::new(),
            name,
            status: CommitteeStatus::Active,
            members: Vec::new(),
            meetings: Vec::new(),
        })
    }

    /// Set the standing. No transition order is enforced.
    pub fn set_status(&mut self, status: CommitteeStatus) {
        self.status = status;
    }

    // ── Members ─────────────────────────────────────────────────────

    /// Add a member to the roster.
    pub fn attach_member(&mut self, member: CommitteeMember) -> MemberId {
        let id = member.id;
        tracing::debug!(committee = %self.id, member = %id, "member attached");
        self.members.push(member);
        id
    }

    /// Remove a member by id, returning them.
    ///
    /// Past meetings keep their attendance rows — removal never rewrites
    /// recorded history.
    pub fn detach_member(&mut self, id: MemberId) -> Result<CommitteeMember, NotFoundError> {
        match self.members.iter().position(|m| m.id == id) {
            Some(idx) => Ok(self.members.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Member,
                id: id.to_string(),
                parent_kind: EntityKind::Committee,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Number of members on the roster. Quorum is derived from this.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    // ── Meetings ────────────────────────────────────────────────────

    /// Attach a meeting, stamping its committee id.
    pub fn attach_meeting(&mut self, mut meeting: CommitteeMeeting) -> MeetingId {
        meeting.committee_id = self.id;
        let id = meeting.id;
        tracing::debug!(committee = %self.id, meeting = %id, "meeting attached");
        self.meetings.push(meeting);
        id
    }

    /// Detach a meeting by id, returning it.
    pub fn detach_meeting(&mut self, id: MeetingId) -> Result<CommitteeMeeting, NotFoundError> {
        match self.meetings.iter().position(|m| m.id == id) {
            Some(idx) => Ok(self.meetings.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Meeting,
                id: id.to_string(),
                parent_kind: EntityKind::Committee,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Look up a meeting mutably by id.
    pub fn meeting_mut(&mut self, id: MeetingId) -> Option<&mut CommitteeMeeting> {
        self.meetings.iter_mut().find(|m| m.id == id)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
