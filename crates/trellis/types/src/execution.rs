//! Executions: the live records of running process instances
//!
//! An Execution is the engine-internal record for one running process
//! instance. It owns its whole runtime tree: child scope executions,
//! variables, pending jobs, open incidents, and links to called sub
//! process instances. Removing an instance means removing everything
//! the root execution owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ── Identifiers ──────────────────────────────────────────────────────

/// Unique identifier for a process instance (the root execution)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessInstanceId(pub String);

impl ProcessInstanceId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn short(&self) -> &str {
        &self.0[..8.min(self.0.len())]
    }
}

impl std::fmt::Display for ProcessInstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a scope execution inside an instance tree
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionId(pub String);

impl ExecutionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ExecutionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Execution ────────────────────────────────────────────────────────

/// The live record of a running process instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Execution {
    /// Instance identifier (the root execution's id)
    pub id: ProcessInstanceId,
    /// Key of the process definition this instance was started from
    pub definition_key: String,
    /// Caller-supplied correlation key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    /// Current lifecycle state
    pub state: ExecutionState,
    /// Instance-level variables
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,
    /// Child scope executions (one per active branch/activity scope)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ChildExecution>,
    /// Pending asynchronous work items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<Job>,
    /// Open incidents attached to this instance
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incidents: Vec<Incident>,
    /// The calling process instance, if this instance was started by one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_instance: Option<ProcessInstanceId>,
    /// Process instances this instance has called and still owns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_instances: Vec<ProcessInstanceId>,
    /// When the instance was started
    pub created_at: DateTime<Utc>,
}

impl Execution {
    /// Create a new active process instance record
    pub fn new(id: ProcessInstanceId, definition_key: impl Into<String>) -> Self {
        Self {
            id,
            definition_key: definition_key.into(),
            business_key: None,
            state: ExecutionState::Active,
            variables: HashMap::new(),
            children: Vec::new(),
            jobs: Vec::new(),
            incidents: Vec::new(),
            super_instance: None,
            sub_instances: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_business_key(mut self, key: impl Into<String>) -> Self {
        self.business_key = Some(key.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ChildExecution) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    pub fn with_incident(mut self, incident: Incident) -> Self {
        self.incidents.push(incident);
        self
    }

    pub fn with_super_instance(mut self, caller: ProcessInstanceId) -> Self {
        self.super_instance = Some(caller);
        self
    }

    pub fn with_sub_instance(mut self, callee: ProcessInstanceId) -> Self {
        self.sub_instances.push(callee);
        self
    }

    /// Suspend the instance (it stays live and deletable)
    pub fn suspend(&mut self) {
        self.state = ExecutionState::Suspended;
    }

    /// Reactivate a suspended instance
    pub fn activate(&mut self) {
        self.state = ExecutionState::Active;
    }

    // ── Query methods ────────────────────────────────────────────────

    pub fn is_active(&self) -> bool {
        self.state == ExecutionState::Active
    }

    pub fn is_suspended(&self) -> bool {
        self.state == ExecutionState::Suspended
    }

    /// Variables held by the instance itself and all child scopes
    pub fn variable_count(&self) -> usize {
        self.variables.len()
            + self
                .children
                .iter()
                .map(|c| c.variables.len())
                .sum::<usize>()
    }

    /// Everything the instance owns: scope executions, variables, jobs,
    /// incidents. Used to account for what a cascading removal destroys.
    pub fn owned_artifact_count(&self) -> usize {
        self.children.len() + self.variable_count() + self.jobs.len() + self.incidents.len()
    }

    pub fn has_sub_instances(&self) -> bool {
        !self.sub_instances.is_empty()
    }
}

/// Lifecycle state of a live execution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExecutionState {
    /// Running
    #[default]
    Active,
    /// Suspended by an operator; still live, still deletable
    Suspended,
}

// ── Owned artifacts ──────────────────────────────────────────────────

/// A child scope execution inside an instance tree
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChildExecution {
    /// Scope execution identifier
    pub id: ExecutionId,
    /// The activity this scope is executing
    pub activity_id: String,
    /// Scope-local variables
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,
}

impl ChildExecution {
    pub fn new(activity_id: impl Into<String>) -> Self {
        Self {
            id: ExecutionId::generate(),
            activity_id: activity_id.into(),
            variables: HashMap::new(),
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// A pending asynchronous work item owned by an instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    /// Which handler executes this job when it comes due
    pub handler_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl Job {
    pub fn new(handler_type: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            handler_type: handler_type.into(),
            due_date: None,
        }
    }

    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }
}

/// An open incident attached to an instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub incident_type: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Incident {
    pub fn new(incident_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            incident_type: incident_type.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}
