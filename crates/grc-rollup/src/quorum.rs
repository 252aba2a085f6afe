//! # Meeting Quorum
//!
//! Quorum is derived, never stored: it is a function of the committee's
//! roster size and the attendance rows recorded on a meeting.

use serde::{Deserialize, Serialize};

use grc_core::AttendanceStatus;
use grc_registry::Committee;
use grc_state::{CommitteeMeeting, MeetingAttendee};

use crate::aggregate::count_by;

/// Quorum evaluation for one meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quorum {
    /// Attendees recorded as Present. Late, Excused, and Absent do not
    /// count.
    pub present: usize,
    /// Minimum Present count for the meeting to be valid:
    /// `ceil(members / 2)`.
    pub required: usize,
    /// Whether quorum is met.
    pub met: bool,
}

/// Evaluate quorum for a roster of `member_count` against recorded
/// attendance.
pub fn quorum(member_count: usize, attendees: &[MeetingAttendee]) -> Quorum {
    let present = count_by(attendees, |a| a.status == AttendanceStatus::Present);
    let required = member_count.div_ceil(2);
    Quorum {
        present,
        required,
        met: present >= required,
    }
}

/// Evaluate quorum for a meeting against its committee's current roster.
pub fn meeting_quorum(committee: &Committee, meeting: &CommitteeMeeting) -> Quorum {
    quorum(committee.member_count(), &meeting.attendees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use grc_core::MemberId;

    fn attendees(statuses: &[AttendanceStatus]) -> Vec<MeetingAttendee> {
        statuses
            .iter()
            .map(|&status| MeetingAttendee {
                member_id: MemberId::new(),
                status,
            })
            .collect()
    }

    #[test]
    fn test_five_members_three_present_met() {
        let rows = attendees(&[
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Present,
        ]);
        let q = quorum(5, &rows);
        assert_eq!(q.required, 3);
        assert_eq!(q.present, 3);
        assert!(q.met);
    }

    #[test]
    fn test_five_members_two_present_not_met() {
        let rows = attendees(&[AttendanceStatus::Present, AttendanceStatus::Present]);
        let q = quorum(5, &rows);
        assert_eq!(q.required, 3);
        assert!(!q.met);
    }

    #[test]
    fn test_late_and_excused_do_not_count() {
        // 4 members, attendees [Present, Present, Absent, Late]:
        // present 2, required 2, met.
        let rows = attendees(&[
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ]);
        let q = quorum(4, &rows);
        assert_eq!(q.present, 2);
        assert_eq!(q.required, 2);
        assert!(q.met);

        let all_late = attendees(&[
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ]);
        let q = quorum(4, &all_late);
        assert_eq!(q.present, 0);
        assert!(!q.met);
    }

    #[test]
    fn test_odd_roster_rounds_up() {
        assert_eq!(quorum(7, &[]).required, 4);
        assert_eq!(quorum(6, &[]).required, 3);
        assert_eq!(quorum(1, &[]).required, 1);
    }

    #[test]
    fn test_empty_roster_is_vacuously_met() {
        let q = quorum(0, &[]);
        assert_eq!(q.required, 0);
        assert!(q.met);
    }

    #[test]
    fn test_meeting_quorum_uses_roster() {
        use grc_core::{AttendanceStatus, Timestamp};
        use grc_registry::CommitteeMember;

        let mut committee = Committee::new("Risk Committee").unwrap();
        let joined = Timestamp::parse("2025-01-01T00:00:00Z").unwrap();
        let mut member_ids = Vec::new();
        for name in ["Ana", "Ben", "Chloe", "Dev", "Ed"] {
            member_ids.push(
                committee.attach_member(CommitteeMember::new(name, "Member", joined).unwrap()),
            );
        }
        let meeting_id = committee.attach_meeting(
            CommitteeMeeting::new(
                committee.id,
                "Monthly",
                Timestamp::parse("2026-06-01T10:00:00Z").unwrap(),
            )
            .unwrap(),
        );
        let meeting = committee.meeting_mut(meeting_id).unwrap();
        for id in member_ids.iter().take(3) {
            meeting.record_attendance(*id, AttendanceStatus::Present).unwrap();
        }

        let q = meeting_quorum(&committee, &committee.meetings[0]);
        assert_eq!(q.present, 3);
        assert_eq!(q.required, 3);
        assert!(q.met);
    }
}
