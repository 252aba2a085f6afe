//! # grc-registry — Container Records and the Per-Session Store
//!
//! The record families that own children without having a lifecycle of
//! their own, plus the store that replaces the console's module-level
//! mock arrays.
//!
//! ## Ownership Rule
//!
//! Every child record belongs to exactly one parent container — array
//! membership is ownership. Attaching a child cascades the parent's
//! identifier onto it; detaching removes it by identity and returns it.
//! There is no re-parent operation anywhere in this crate: moving a child
//! across parents means deleting it and recreating it under the new
//! parent, by construction.
//!
//! ## No Ambient State
//!
//! The [`Store`] is a plain owned value passed by reference into whatever
//! layer drives the core. Each session constructs its own; there are no
//! globals, no statics, and no interior mutability.

pub mod committee;
pub mod esg;
pub mod requirement;
pub mod store;

// ─── Requirement re-exports ─────────────────────────────────────────

pub use requirement::{Control, Obligation, Requirement, RequirementDocument};

// ─── Committee re-exports ───────────────────────────────────────────

pub use committee::{Committee, CommitteeMember};

// ─── ESG re-exports ─────────────────────────────────────────────────

pub use esg::{EsgInitiative, EsgMetric};

// ─── Store re-exports ───────────────────────────────────────────────

pub use store::Store;
