//! # Console Flow Integration Test
//!
//! Drives the core the way the presentation layer does: build or edit a
//! record, validate it through its lifecycle methods, attach it to its
//! parent, recompute the derived statistics, and classify values for
//! display. Each section mirrors one of the console's screens.

use grc_core::{
    classify, days_between, is_due_soon_at, is_overdue_at, AttendanceStatus, Badge,
    ComplianceStatus, DisplayCategory, FindingSeverity, FindingStatus, RiskLevel, StatusKind,
    Timestamp,
};
use grc_registry::{
    Committee, CommitteeMember, Control, EsgInitiative, EsgMetric, Obligation, Requirement, Store,
};
use grc_rollup as rollup;
use grc_state::{ActionItem, Audit, CommitteeMeeting, Filing, Finding, FindingOrigin};

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

// ---------------------------------------------------------------------------
// 1. Requirement screen: obligations, controls, compliance rate, advisory
// ---------------------------------------------------------------------------

#[test]
fn requirement_flow_with_compliance_rollup() {
    let mut store = Store::new();
    let req_id = store.insert_requirement(
        Requirement::new("AMLD5 customer due diligence", RiskLevel::Critical).unwrap(),
    );

    let statuses = [
        ComplianceStatus::Compliant,
        ComplianceStatus::NonCompliant,
        ComplianceStatus::Compliant,
    ];
    {
        let req = store.requirement_mut(req_id).unwrap();
        for (i, status) in statuses.iter().enumerate() {
            let mut ob = Obligation::new(req_id, format!("Duty {i}")).unwrap();
            ob.set_status(*status);
            req.attach_obligation(ob);
        }
        req.attach_control(Control::new(req_id, "PEP screening").unwrap());
        req.set_compliance_status(ComplianceStatus::Compliant);
    }

    let req = store.requirement(req_id).unwrap();

    // Obligations [Compliant, Non-Compliant, Compliant] → 2/3.
    let rate = rollup::compliance_rate(&req.obligations);
    assert!((rate - 2.0 / 3.0).abs() < 1e-9);

    // The child rollup does not support the declared "Compliant":
    // the untested control rolls up Ineffective → Non-Compliant.
    let notice = rollup::consistency_notice(req).expect("declared status disagrees");
    assert_eq!(notice.declared, ComplianceStatus::Compliant);
    assert_eq!(notice.expected, ComplianceStatus::NonCompliant);
    // Advisory: the declared value is still what the caller set.
    assert_eq!(req.compliance_status, ComplianceStatus::Compliant);

    // Display layer asks for badges.
    assert_eq!(req.risk_level.badge(), DisplayCategory::Danger);
    assert_eq!(
        classify(StatusKind::Compliance, "Non-Compliant"),
        DisplayCategory::Danger
    );
}

// ---------------------------------------------------------------------------
// 2. Audit screen: findings, severity rollup, close flow
// ---------------------------------------------------------------------------

#[test]
fn audit_flow_with_finding_rollups() {
    let mut store = Store::new();
    let audit_id = store.insert_audit(Audit::new("FY26 internal audit", ts("2026-02-01T00:00:00Z")).unwrap());

    let identified = ts("2026-02-10T00:00:00Z");
    {
        let audit = store.audit_mut(audit_id).unwrap();
        audit.begin().unwrap();
        for severity in [
            FindingSeverity::Critical,
            FindingSeverity::High,
            FindingSeverity::Low,
        ] {
            let f = Finding::new(
                format!("{severity} issue"),
                severity,
                FindingOrigin::Audit(audit_id),
                identified,
            )
            .unwrap();
            audit.attach_finding(f);
        }
    }

    let audit = store.audit(audit_id).unwrap();
    assert_eq!(rollup::critical_count(&audit.findings), 1);
    assert_eq!(rollup::total_count(&audit.findings), 3);
    assert_eq!(
        rollup::worst_severity(&audit.findings),
        Some(FindingSeverity::Critical)
    );

    // Attach-then-detach restores the original count (rollup idempotence
    // over relationship changes).
    let before = rollup::total_count(&store.audit(audit_id).unwrap().findings);
    let extra_id = {
        let audit = store.audit_mut(audit_id).unwrap();
        let f = Finding::new(
            "Transient",
            FindingSeverity::Medium,
            FindingOrigin::Audit(audit_id),
            identified,
        )
        .unwrap();
        audit.attach_finding(f)
    };
    assert_eq!(
        rollup::total_count(&store.audit(audit_id).unwrap().findings),
        before + 1
    );
    store.audit_mut(audit_id).unwrap().detach_finding(extra_id).unwrap();
    assert_eq!(
        rollup::total_count(&store.audit(audit_id).unwrap().findings),
        before
    );

    // Close the critical finding without a date: today is filled in.
    {
        let audit = store.audit_mut(audit_id).unwrap();
        let critical_id = audit
            .findings
            .iter()
            .find(|f| f.severity == FindingSeverity::Critical)
            .map(|f| f.id)
            .unwrap();
        let f = audit.finding_mut(critical_id).unwrap();
        f.close(None).unwrap();
        assert_eq!(f.status, FindingStatus::Closed);
        assert!(f.closed_date.is_some());
    }
    assert_eq!(rollup::open_count(&store.audit(audit_id).unwrap().findings), 2);
}

// ---------------------------------------------------------------------------
// 3. Committee screen: meeting lifecycle, attendance, quorum, action items
// ---------------------------------------------------------------------------

#[test]
fn committee_flow_with_quorum() {
    let mut store = Store::new();
    let committee_id = store.insert_committee(Committee::new("ESG Steering Committee").unwrap());

    let joined = ts("2024-06-01T00:00:00Z");
    let member_ids: Vec<_> = {
        let committee = store.committee_mut(committee_id).unwrap();
        ["Ana", "Ben", "Chloe", "Dev"]
            .into_iter()
            .map(|name| {
                committee.attach_member(CommitteeMember::new(name, "Member", joined).unwrap())
            })
            .collect()
    };

    let meeting_id = {
        let committee = store.committee_mut(committee_id).unwrap();
        let meeting =
            CommitteeMeeting::new(committee_id, "Q3 review", ts("2026-07-01T09:00:00Z")).unwrap();
        committee.attach_meeting(meeting)
    };

    // 4 members, attendance [Present, Present, Absent, Late].
    {
        let committee = store.committee_mut(committee_id).unwrap();
        let meeting = committee.meeting_mut(meeting_id).unwrap();
        meeting.begin().unwrap();
        let marks = [
            AttendanceStatus::Present,
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
        ];
        for (member, mark) in member_ids.iter().zip(marks) {
            meeting.record_attendance(*member, mark).unwrap();
        }
        let item_id = meeting.attach_action_item(ActionItem::new(meeting_id, "Publish minutes"));
        meeting.action_item_mut(item_id).unwrap().status = grc_core::ActionItemStatus::Completed;
        meeting
            .complete("Quorum present; budget approved.", vec!["Approve FY27 ESG budget".into()])
            .unwrap();
    }

    let committee = store.committee(committee_id).unwrap();
    let meeting = &committee.meetings[0];
    let q = rollup::meeting_quorum(committee, meeting);
    assert_eq!(q.present, 2);
    assert_eq!(q.required, 2);
    assert!(q.met);

    assert_eq!(rollup::completion_percent(&meeting.action_items), 100);
    assert!(meeting.minutes.is_some());

    // Tenure display for the roster.
    let tenure = committee.members[0].tenure_at(ts("2026-06-01T00:00:00Z"));
    assert_eq!(tenure, "2 years");
}

// ---------------------------------------------------------------------------
// 4. Filing screen: deadline math, resubmission loop, history audit log
// ---------------------------------------------------------------------------

#[test]
fn filing_flow_with_deadline_and_history() {
    let mut store = Store::new();
    let due = ts("2026-09-30T00:00:00Z");
    let filing_id = store.insert_filing(Filing::new("Annual ESG disclosure", Some(due)).unwrap());

    let today = ts("2026-09-10T00:00:00Z");
    assert!(!is_overdue_at(due, today));
    assert!(is_due_soon_at(due, today));
    assert_eq!(days_between(today, due), 20);

    {
        let filing = store.filing_mut(filing_id).unwrap();
        filing.attach_document("esg-disclosure-draft.pdf");
        filing.add_comment("dana", "Draft ready for review").unwrap();
        filing.submit_for_review().unwrap();
        filing.submit().unwrap();
        filing.reject("Scope 3 figures missing").unwrap();
        filing.amend().unwrap();
        filing.resubmit().unwrap();
        filing.submit().unwrap();
        filing.accept().unwrap();
    }

    let filing = store.filing(filing_id).unwrap();
    assert!(filing.is_terminal());
    // Seven transitions, seven history entries, in order.
    assert_eq!(filing.history.len(), 7);
    assert_eq!(
        filing.history[2].note.as_deref(),
        Some("Scope 3 figures missing")
    );
    assert_eq!(filing.comments.len(), 1);

    // Past the deadline the same date math flips.
    let late = ts("2026-10-02T00:00:00Z");
    assert!(is_overdue_at(due, late));
    assert_eq!(days_between(late, due), -2);
}

// ---------------------------------------------------------------------------
// 5. ESG screen: budget utilization and metric progress
// ---------------------------------------------------------------------------

#[test]
fn esg_flow_with_budget_and_progress() {
    let mut store = Store::new();
    let initiative_id = store.insert_initiative(
        EsgInitiative::new("Renewable energy transition", 500_000.0).unwrap(),
    );

    {
        let initiative = store.initiative_mut(initiative_id).unwrap();
        initiative.record_spend(325_000.0).unwrap();
        let metric = EsgMetric::new(initiative_id, "Renewable share", "%", 60.0).unwrap();
        let metric_id = initiative.attach_metric(metric);
        initiative.metric_mut(metric_id).unwrap().record_value(75.0);
    }

    let initiative = store.initiative(initiative_id).unwrap();
    assert_eq!(
        rollup::budget_utilization(initiative.spent, initiative.budget),
        65.0
    );

    let metric = &initiative.metrics[0];
    // Overshoot: displayed progress caps, the raw ratio does not.
    assert_eq!(rollup::progress_percent(metric.current_value, metric.target_value), 100);
    assert!(rollup::progress_ratio(metric.current_value, metric.target_value) > 1.2);

    // Zero-budget safety on a fresh initiative.
    let zero = EsgInitiative::new("Unfunded pilot", 0.0).unwrap();
    assert_eq!(rollup::budget_utilization(zero.spent, zero.budget), 0.0);
}

// ---------------------------------------------------------------------------
// 6. Boundary: records round-trip as plain JSON
// ---------------------------------------------------------------------------

#[test]
fn records_round_trip_through_json_boundary() {
    let mut filing = Filing::new("Boundary filing", Some(ts("2026-12-31T00:00:00Z"))).unwrap();
    filing.submit_for_review().unwrap();

    let json = serde_json::to_value(&filing).unwrap();
    assert_eq!(json["status"], "Pending Review");
    assert_eq!(json["history"][0]["from_status"], "Draft");

    let parsed: Filing = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.status, filing.status);

    // Dates arrive as ISO-8601 strings and are parsed at the edge.
    let due = Timestamp::parse_iso8601("2026-12-31").unwrap();
    assert_eq!(due.to_iso8601(), "2026-12-31T00:00:00Z");
}
