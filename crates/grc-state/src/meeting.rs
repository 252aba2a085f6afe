//! # Committee Meeting Lifecycle State Machine
//!
//! Models a governance committee meeting: scheduling, attendance,
//! minutes, decisions, and action items.
//!
//! ## States
//!
//! ```text
//! Scheduled ──▶ In Progress ──▶ Completed (terminal)
//!     │
//!     └──▶ Cancelled (terminal)
//! ```
//!
//! ## Minutes Finalize
//!
//! Minutes and decisions have no setter of their own — they are only
//! written by [`CommitteeMeeting::complete`], which transitions the
//! meeting to Completed in the same operation. A meeting with minutes is
//! by construction a finished meeting.
//!
//! ## Attendance
//!
//! One attendee row per member (unique on member id);
//! [`CommitteeMeeting::record_attendance`] upserts the member's row, since
//! the console re-marks attendance freely while a meeting is open. Quorum
//! is derived by the rollup layer, never stored.

use serde::{Deserialize, Serialize};

use grc_core::{
    ActionItemId, ActionItemStatus, AttendanceStatus, CommitteeId, EntityKind, MeetingId,
    MeetingStatus, MemberId, NotFoundError, Timestamp, TransitionError, ValidationError,
};

/// Attendance of one member at one meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingAttendee {
    /// The member this row belongs to. At most one row per member.
    pub member_id: MemberId,
    /// Recorded attendance.
    pub status: AttendanceStatus,
}

/// A follow-up item raised in a meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionItem {
    /// Unique action item identifier.
    pub id: ActionItemId,
    /// The meeting this item was raised in; stamped on attach.
    pub meeting_id: MeetingId,
    /// What has to be done.
    pub description: String,
    /// The member responsible, if assigned.
    pub assigned_to: Option<MemberId>,
    /// Target completion date.
    pub due_date: Option<Timestamp>,
    /// Progress status. Freely settable.
    pub status: ActionItemStatus,
}

impl ActionItem {
    /// Create a new open action item.
    ///
    /// The meeting id is re-stamped on attach; the one passed here only
    /// matters until then.
    pub fn new(meeting_id: MeetingId, description: impl Into<String>) -> Self {
        Self {
            id: ActionItemId::new(),
            meeting_id,
            description: description.into(),
            assigned_to: None,
            due_date: None,
            status: ActionItemStatus::Open,
        }
    }
}

/// Record of a meeting state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingTransitionRecord {
    /// State before the transition.
    pub from_status: MeetingStatus,
    /// State after the transition.
    pub to_status: MeetingStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
}

/// A committee meeting with its lifecycle state, attendance, and
/// action items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeMeeting {
    /// Unique meeting identifier.
    pub id: MeetingId,
    /// The committee this meeting belongs to; stamped on attach.
    pub committee_id: CommitteeId,
    /// Meeting title.
    pub title: String,
    /// When the meeting is scheduled for.
    pub scheduled_date: Timestamp,
    /// Current lifecycle state.
    pub status: MeetingStatus,
    /// Attendance rows, at most one per member.
    pub attendees: Vec<MeetingAttendee>,
    /// Action items raised in this meeting.
    pub action_items: Vec<ActionItem>,
    /// Minutes; written only by [`CommitteeMeeting::complete`].
    pub minutes: Option<String>,
    /// Decisions taken; written only by [`CommitteeMeeting::complete`].
    pub decisions: Vec<String>,
    /// Ordered log of all state transitions.
    pub transitions: Vec<MeetingTransitionRecord>,
}

impl CommitteeMeeting {
    /// Create a new scheduled meeting.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty title.
    pub fn new(
        committee_id: CommitteeId,
        title: impl Into<String>,
        scheduled_date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Meeting,
                field: "title",
            });
        }
        Ok(Self {
            id: MeetingId::new(),
            committee_id,
            title,
            scheduled_date,
            status: MeetingStatus::Scheduled,
            attendees: Vec::new(),
            action_items: Vec::new(),
            minutes: None,
            decisions: Vec::new(),
            transitions: Vec::new(),
        })
    }

    /// Open the meeting (Scheduled → In Progress).
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        self.require_transition(MeetingStatus::InProgress)?;
        self.do_transition(MeetingStatus::InProgress);
        Ok(())
    }

    /// Cancel the meeting (Scheduled → Cancelled).
    pub fn cancel(&mut self) -> Result<(), TransitionError> {
        self.require_transition(MeetingStatus::Cancelled)?;
        self.do_transition(MeetingStatus::Cancelled);
        Ok(())
    }

    /// Submit minutes and decisions, finalizing the meeting
    /// (In Progress → Completed).
    ///
    /// Minutes submission always finalizes — there is no way to write
    /// minutes into a meeting that stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for empty minutes;
    /// the transition is validated before anything is written.
    pub fn complete(
        &mut self,
        minutes: impl Into<String>,
        decisions: Vec<String>,
    ) -> Result<(), grc_core::GrcError> {
        self.require_transition(MeetingStatus::Completed)?;
        let minutes = minutes.into();
        if minutes.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Meeting,
                field: "minutes",
            }
            .into());
        }
        self.minutes = Some(minutes);
        self.decisions = decisions;
        self.do_transition(MeetingStatus::Completed);
        Ok(())
    }

    /// Whether the meeting is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ── Attendance ──────────────────────────────────────────────────

    /// Record a member's attendance, upserting their row.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Terminal`] once the meeting is
    /// completed or cancelled — a finished meeting accepts no edits.
    pub fn record_attendance(
        &mut self,
        member_id: MemberId,
        status: AttendanceStatus,
    ) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            tracing::warn!(meeting = %self.id, member = %member_id, "attendance edit on finished meeting rejected");
            return Err(TransitionError::Terminal {
                kind: EntityKind::Meeting,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        match self.attendees.iter_mut().find(|a| a.member_id == member_id) {
            Some(row) => row.status = status,
            None => self.attendees.push(MeetingAttendee { member_id, status }),
        }
        Ok(())
    }

    // ── Action items ────────────────────────────────────────────────

    /// Attach an action item, stamping its meeting id.
    pub fn attach_action_item(&mut self, mut item: ActionItem) -> ActionItemId {
        item.meeting_id = self.id;
        let id = item.id;
        tracing::debug!(meeting = %self.id, action_item = %id, "action item attached");
        self.action_items.push(item);
        id
    }

    /// Detach an action item by id, returning it.
    pub fn detach_action_item(&mut self, id: ActionItemId) -> Result<ActionItem, NotFoundError> {
        match self.action_items.iter().position(|i| i.id == id) {
            Some(idx) => Ok(self.action_items.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::ActionItem,
                id: id.to_string(),
                parent_kind: EntityKind::Meeting,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Look up an action item mutably by id.
    pub fn action_item_mut(&mut self, id: ActionItemId) -> Option<&mut ActionItem> {
        self.action_items.iter_mut().find(|i| i.id == id)
    }

    fn require_transition(&self, to: MeetingStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::Terminal {
                kind: EntityKind::Meeting,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        if !self.status.valid_transitions().contains(&to) {
            tracing::warn!(meeting = %self.id, from = %self.status, to = %to, "invalid transition rejected");
            return Err(TransitionError::Invalid {
                kind: EntityKind::Meeting,
                id: self.id.to_string(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    fn do_transition(&mut self, to: MeetingStatus) {
        tracing::debug!(meeting = %self.id, from = %self.status, to = %to, "meeting transition");
        self.transitions.push(MeetingTransitionRecord {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
        });
        self.status = to;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
