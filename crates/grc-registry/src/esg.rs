//! # ESG Initiatives and Metrics
//!
//! Budget and progress tracking records. Everything derived (utilization,
//! progress percent, raw ratio) lives in the rollup layer; these records
//! hold the raw numbers.

use serde::{Deserialize, Serialize};

use grc_core::{
    EntityKind, InitiativeId, MetricId, NotFoundError, Timestamp, TrackingStatus,
    ValidationError,
};

/// A measurable indicator tracked under an initiative
/// (e.g. tCO2e emitted, % renewable energy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgMetric {
    /// Unique metric identifier.
    pub id: MetricId,
    /// The owning initiative; stamped on attach.
    pub initiative_id: InitiativeId,
    /// Metric name.
    pub name: String,
    /// Unit of measure (e.g. "tCO2e", "%").
    pub unit: String,
    /// Current measured value. May legitimately exceed the target.
    pub current_value: f64,
    /// Target value.
    pub target_value: f64,
    /// Tracking posture. Freely settable.
    pub status: TrackingStatus,
}

impl EsgMetric {
    /// Create a new metric. The initiative id is re-stamped on attach.
    pub fn new(
        initiative_id: InitiativeId,
        name: impl Into<String>,
        unit: impl Into<String>,
        target_value: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Metric,
                field: "name",
            });
        }
        Ok(Self {
            id: MetricId::new(),
            initiative_id,
            name,
            unit: unit.into(),
            current_value: 0.0,
            target_value,
            status: TrackingStatus::NotStarted,
        })
    }

    /// Record a new measurement.
    pub fn record_value(&mut self, value: f64) {
        self.current_value = value;
    }
}

/// An ESG initiative with a budget and its tracked metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgInitiative {
    /// Unique initiative identifier.
    pub id: InitiativeId,
    /// Initiative name.
    pub name: String,
    /// Tracking posture. Freely settable.
    pub status: TrackingStatus,
    /// Allocated budget.
    pub budget: f64,
    /// Spend to date.
    pub spent: f64,
    /// When work started.
    pub start_date: Option<Timestamp>,
    /// Target completion date.
    pub target_date: Option<Timestamp>,
    /// Owned metrics.
    pub metrics: Vec<EsgMetric>,
}

impl EsgInitiative {
    /// Create a new initiative.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty name and
    /// [`ValidationError::InvalidField`] for a negative budget.
    pub fn new(name: impl Into<String>, budget: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField {
                kind: EntityKind::Initiative,
                field: "name",
            });
        }
        if budget < 0.0 {
            return Err(ValidationError::InvalidField {
                kind: EntityKind::Initiative,
                field: "budget",
                reason: format!("budget must be non-negative, got {budget}"),
            });
        }
        Ok(Self {
            id: InitiativeId::new(),
            name,
            status: TrackingStatus::NotStarted,
            budget,
            spent: 0.0,
            start_date: None,
            target_date: None,
            metrics: Vec::new(),
        })
    }

    /// Set the tracking posture. No transition order is enforced.
    pub fn set_status(&mut self, status: TrackingStatus) {
        self.status = status;
    }

    /// Record additional spend.
    ///
    /// Spend beyond the budget is allowed — utilization clamps at display
    /// time, the raw figure stays queryable.
    pub fn record_spend(&mut self, amount: f64) -> Result<(), ValidationError> {
        if amount < 0.0 || !amount.is_finite() {
            return Err(ValidationError::InvalidField {
                kind: EntityKind::Initiative,
                field: "spent",
                reason: format!("spend must be a non-negative amount, got {amount}"),
            });
        }
        self.spent += amount;
        Ok(())
    }

    /// Attach a metric, stamping its initiative id.
    pub fn attach_metric(&mut self, mut metric: EsgMetric) -> MetricId {
        metric.initiative_id = self.id;
        let id = metric.id;
        tracing::debug!(initiative = %self.id, metric = %id, "metric attached");
        self.metrics.push(metric);
        id
    }

    /// Detach a metric by id, returning it.
    pub fn detach_metric(&mut self, id: MetricId) -> Result<EsgMetric, NotFoundError> {
        match self.metrics.iter().position(|m| m.id == id) {
            Some(idx) => Ok(self.metrics.remove(idx)),
            None => Err(NotFoundError::Child {
                kind: EntityKind::Metric,
                id: id.to_string(),
                parent_kind: EntityKind::Initiative,
                parent_id: self.id.to_string(),
            }),
        }
    }

    /// Look up a metric mutably by id.
    pub fn metric_mut(&mut self, id: MetricId) -> Option<&mut EsgMetric> {
        self.metrics.iter_mut().find(|m| m.id == id)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
