//! Operation log entries: the immutable audit trail of state mutations
//!
//! Every state-changing engine operation appends exactly one entry
//! describing what happened, to whom, and why. Entries are append-only
//! and never updated or deleted once written.

use crate::ProcessInstanceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Operation Type ───────────────────────────────────────────────────

/// The kind of state mutation an operation log entry records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    /// A process instance was deleted
    Delete,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

// ── Property Change ──────────────────────────────────────────────────

/// One before/after value pair attached to an operation log entry.
///
/// Deletions log the fact of removal, not field-level diffs: a single
/// no-op placeholder change stands in for the change list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl PropertyChange {
    pub fn new(
        property: impl Into<String>,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Self {
        Self {
            property: Some(property.into()),
            old_value,
            new_value,
        }
    }

    /// The no-op placeholder change
    pub fn empty() -> Self {
        Self {
            property: None,
            old_value: None,
            new_value: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.property.is_none() && self.old_value.is_none() && self.new_value.is_none()
    }
}

// ── Operation Log Entry ──────────────────────────────────────────────

/// An immutable audit record of one state-changing operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperationLogEntry {
    /// Unique entry identifier
    pub entry_id: String,
    /// What kind of mutation happened
    pub operation_type: OperationType,
    /// The entity the mutation targeted
    pub entity_id: ProcessInstanceId,
    /// Entity-level before value, if the operation has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// Entity-level after value, if the operation has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// Ordered list of property changes
    pub property_changes: Vec<PropertyChange>,
    /// When the operation happened
    pub timestamp: DateTime<Utc>,
    /// Who performed the operation (if authenticated by the caller)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl OperationLogEntry {
    pub fn new(
        operation_type: OperationType,
        entity_id: ProcessInstanceId,
        property_changes: Vec<PropertyChange>,
    ) -> Self {
        Self {
            entry_id: uuid::Uuid::new_v4().to_string(),
            operation_type,
            entity_id,
            old_value: None,
            new_value: None,
            property_changes,
            timestamp: Utc::now(),
            actor: None,
        }
    }

    pub fn with_values(mut self, old_value: Option<String>, new_value: Option<String>) -> Self {
        self.old_value = old_value;
        self.new_value = new_value;
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}
