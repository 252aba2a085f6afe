//! # Filing Lifecycle State Machine
//!
//! Models a regulatory filing through preparation, review, submission,
//! and the rejection/amendment loop.
//!
//! ## States
//!
//! ```text
//! Draft ──▶ Pending Review ──▶ Submitted ──▶ Accepted (terminal)
//!                ▲                 │
//!                │                 ▼
//!              Amended ◀────── Rejected
//! ```
//!
//! ## History Is the System of Record
//!
//! Every transition appends exactly one [`FilingHistoryEntry`] capturing
//! the old and new status. The history list is append-only: entries are
//! never mutated or removed, and detaching a document or reminder never
//! rewrites it. Comments share the append-only rule; documents and
//! reminders are the only detachable children.

use serde::{Deserialize, Serialize};

use grc_core::{
    CommentId, DocumentId, EntityKind, FilingId, FilingStatus, NotFoundError, ReminderId,
    Timestamp, TransitionError, ValidationError,
};

/// A document attached to a filing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingDocument {
    /// Unique document identifier.
    pub id: DocumentId,
    /// File name as uploaded.
    pub name: String,
    /// When the document was attached.
    pub uploaded_at: Timestamp,
}

/// A reminder scheduled against a filing deadline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingReminder {
    /// Unique reminder identifier.
    pub id: ReminderId,
    /// When to remind.
    pub remind_at: Timestamp,
    /// Reminder text.
    pub message: String,
}

/// A comment on a filing. Append-only; comments are never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingComment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// Who wrote it.
    pub author: String,
    /// Comment body.
    pub body: String,
    /// When it was written.
    pub created_at: Timestamp,
}

/// One entry in a filing's audit history.
///
/// Appended by every status transition; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingHistoryEntry {
    /// Status before the transition.
    pub from_status: FilingStatus,
    /// Status after the transition.
    pub to_status: FilingStatus,
    /// When the transition occurred.
    pub timestamp: Timestamp,
    /// Free-text note (e.g. the regulator's rejection reason).
    pub note: Option<String>,
}

/// A regulatory filing with its lifecycle state, children, and
/// append-only history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filing {
    /// Unique filing identifier.
    pub id: FilingId,
    /// Filing name (e.g. "FY26 Modern Slavery Statement").
    pub name: String,
    /// Current lifecycle state.
    pub status: FilingStatus,
    /// Submission deadline, if one applies.
    pub due_date: Option<Timestamp>,
    /// Attached documents.
    pub documents: Vec<FilingDocument>,
    /// Scheduled reminders.
    pub reminders: Vec<FilingReminder>,
    /// Discussion thread. Append-only.
    pub comments: Vec<FilingComment>,
    /// Transition audit log. Append-only.
    pub history: Vec<FilingHistoryEntry>,
}

impl Filing {
    /// Create a new draft filing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty name.
    pub fn new(
        name: impl Into<String>,
        due_date: Option<Timestamp>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Filing,
                field: "name",
            });
        }
        Ok(Self {
            id: FilingId::new(),
            name,
            status: FilingStatus::Draft,
            due_date,
            documents: Vec::new(),
            reminders: Vec::new(),
            comments: Vec::new(),
            history: Vec::new(),
        })
    }

    /// Send the draft for internal review (Draft → Pending Review).
    pub fn submit_for_review(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::PendingReview)?;
        self.do_transition(FilingStatus::PendingReview, None);
        Ok(())
    }

    /// File with the regulator (Pending Review → Submitted).
    pub fn submit(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::Submitted)?;
        self.do_transition(FilingStatus::Submitted, None);
        Ok(())
    }

    /// Record regulator acceptance (Submitted → Accepted).
    pub fn accept(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::Accepted)?;
        self.do_transition(FilingStatus::Accepted, None);
        Ok(())
    }

    /// Record regulator rejection with its reason (Submitted → Rejected).
    pub fn reject(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::Rejected)?;
        self.do_transition(FilingStatus::Rejected, Some(reason.into()));
        Ok(())
    }

    /// Start amending a rejected filing (Rejected → Amended).
    pub fn amend(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::Amended)?;
        self.do_transition(FilingStatus::Amended, None);
        Ok(())
    }

    /// Resubmit the amended filing for review (Amended → Pending Review).
    pub fn resubmit(&mut self) -> Result<(), TransitionError> {
        self.require_transition(FilingStatus::PendingReview)?;
        self.do_transition(FilingStatus::PendingReview, None);
        Ok(())
    }

    /// Whether the filing is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    // ── Children ────────────────────────────────────────────────────

    /// Append a comment. Comments are never edited or removed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty body.
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<CommentId, ValidationError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Comment,
                field: "body",
            });
        }
        let comment = FilingComment {
            id: CommentId::new(),
            author: author.into(),
            body,
            created_at: Timestamp::now(),
        };
        let id = comment.id;
        self.comments.push(comment);
        Ok(id)
    }

    /// Attach a document.
    pub fn attach_document(&mut self, name: impl Into<String>) -> DocumentId {
        let doc = FilingDocument {
            id: DocumentId::new(),
            name: name.into(),
            uploaded_at: Timestamp::now(),
        };
        let id = doc.id;
        tracing::debug!(filing = %self.id, document = %id, "document attached");
        self.documents.push(doc);
        id
    }

    /// Detach a document by id, returning it.
    ///
    /// The filing's history is retained untouched — detachment never
    /// rewrites the audit log.
    pub fn detach_document(&mut self, id: DocumentId) -> Result<FilingDocument, NotFoundError> {
        match self.documents.iter().position(|d| d.id == id) {
            Some(idx) => Ok(self.documents.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Document,
                id: id.to_string(),
                parent_kind: EntityKind::Filing,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Schedule a reminder.
    pub fn attach_reminder(
        &mut self,
        remind_at: Timestamp,
        message: impl Into<String>,
    ) -> ReminderId {
        let reminder = FilingReminder {
            id: ReminderId::new(),
            remind_at,
            message: message.into(),
        };
        let id = reminder.id;
        self.reminders.push(reminder);
        id
    }

    /// Remove a reminder by id, returning it.
    pub fn detach_reminder(&mut self, id: ReminderId) -> Result<FilingReminder, NotFoundError> {
        match self.reminders.iter().position(|r| r.id == id) {
            Some(idx) => Ok(self.reminders.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Reminder,
                id: id.to_string(),
                parent_kind: EntityKind::Filing,
                parent_id: self.id.to_string(),
            }),
        }
    }

    fn require_transition(&self, to: FilingStatus) -> Result<(), TransitionError> {
        if self.status.is_terminal() {
            return Err(TransitionError::Terminal {
                kind: EntityKind::Filing,
                id: self.id.to_string(),
                state: self.status.as_str().to_string(),
            });
        }
        if !self.status.valid_transitions().contains(&to) {
            tracing::warn!(filing = %self.id, from = %self.status, to = %to, "invalid transition rejected");
            return Err(TransitionError::Invalid {
                kind: EntityKind::Filing,
                id: self.id.to_string(),
                from: self.status.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }
        Ok(())
    }

    /// Record a state transition, appending one history entry.
    fn do_transition(&mut self, to: FilingStatus, note: Option<String>) {
        tracing::debug!(filing = %self.id, from = %self.status, to = %to, "filing transition");
        self.history.push(FilingHistoryEntry {
            from_status: self.status,
            to_status: to,
            timestamp: Timestamp::now(),
            note,
        });
        self.status = to;
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
