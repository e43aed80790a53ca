//! Deletion requests and removal records

use crate::ProcessInstanceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Deletion Request ─────────────────────────────────────────────────

/// The parameters of one instance-termination request.
///
/// Constructed once per command invocation and never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeletionRequest {
    /// The instance to terminate
    pub process_instance_id: ProcessInstanceId,
    /// Human-readable reason, recorded with the removal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
    /// Bypass caller-supplied lifecycle hooks during the cascading delete
    pub skip_custom_listeners: bool,
    /// Termination was triggered by an external system
    pub externally_terminated: bool,
}

impl DeletionRequest {
    pub fn new(process_instance_id: ProcessInstanceId) -> Self {
        Self {
            process_instance_id,
            delete_reason: None,
            skip_custom_listeners: false,
            externally_terminated: false,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.delete_reason = Some(reason.into());
        self
    }

    pub fn with_skip_custom_listeners(mut self, skip: bool) -> Self {
        self.skip_custom_listeners = skip;
        self
    }

    pub fn with_externally_terminated(mut self, external: bool) -> Self {
        self.externally_terminated = external;
        self
    }
}

// ── Deletion Record ──────────────────────────────────────────────────

/// The durable trace of one completed instance removal.
///
/// Written by the execution subsystem after the instance and everything
/// it owned are gone. Carries the semantic reason, not the mechanics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeletionRecord {
    pub process_instance_id: ProcessInstanceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_reason: Option<String>,
    pub externally_terminated: bool,
    /// Root plus child scope executions removed
    pub removed_executions: usize,
    pub removed_variables: usize,
    pub removed_jobs: usize,
    pub timestamp: DateTime<Utc>,
}

impl DeletionRecord {
    pub fn new(
        process_instance_id: ProcessInstanceId,
        delete_reason: Option<String>,
        externally_terminated: bool,
    ) -> Self {
        Self {
            process_instance_id,
            delete_reason,
            externally_terminated,
            removed_executions: 0,
            removed_variables: 0,
            removed_jobs: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn with_removed_counts(mut self, executions: usize, variables: usize, jobs: usize) -> Self {
        self.removed_executions = executions;
        self.removed_variables = variables;
        self.removed_jobs = jobs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = DeletionRequest::new(ProcessInstanceId::new("proc-1"));
        assert_eq!(request.process_instance_id, ProcessInstanceId::new("proc-1"));
        assert!(request.delete_reason.is_none());
        assert!(!request.skip_custom_listeners);
        assert!(!request.externally_terminated);
    }

    #[test]
    fn test_request_builders() {
        let request = DeletionRequest::new(ProcessInstanceId::new("proc-1"))
            .with_reason("order withdrawn")
            .with_skip_custom_listeners(true)
            .with_externally_terminated(true);

        assert_eq!(request.delete_reason.as_deref(), Some("order withdrawn"));
        assert!(request.skip_custom_listeners);
        assert!(request.externally_terminated);
    }

    #[test]
    fn test_record_counts() {
        let record = DeletionRecord::new(
            ProcessInstanceId::new("proc-1"),
            Some("cleanup".to_string()),
            false,
        )
        .with_removed_counts(3, 7, 2);

        assert_eq!(record.removed_executions, 3);
        assert_eq!(record.removed_variables, 7);
        assert_eq!(record.removed_jobs, 2);
        assert_eq!(record.delete_reason.as_deref(), Some("cleanup"));
    }

    #[test]
    fn test_request_serde_round_trip() {
        let request = DeletionRequest::new(ProcessInstanceId::new("proc-1"))
            .with_reason("duplicate")
            .with_externally_terminated(true);
        let json = serde_json::to_string(&request).unwrap();
        let back: DeletionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.process_instance_id, request.process_instance_id);
        assert_eq!(back.delete_reason.as_deref(), Some("duplicate"));
        assert!(back.externally_terminated);
    }
}
