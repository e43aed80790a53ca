//! Execution manager: lookup and removal of running process instances
//!
//! The execution manager owns the live execution store. Removal is
//! cascading: deleting an instance destroys the root execution and
//! everything it owns (child scope executions, variables, jobs,
//! incidents). Called sub process instances are removed only when the
//! caller asks for a subtree-wide delete; a plain delete detaches them
//! and lets them run on.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use trellis_types::{
    DeletionRecord, Execution, ProcessEngineError, ProcessInstanceId, ProcessResult,
};

// ── Interfaces ───────────────────────────────────────────────────────

/// Lookup and removal surface of the execution subsystem
pub trait ExecutionManager: Send + Sync {
    /// Resolve an instance id to its live execution record
    fn find_execution_by_id(&self, id: &ProcessInstanceId) -> Option<Execution>;

    /// Remove an instance and everything it owns.
    ///
    /// `cascade` extends the removal to called sub process instances;
    /// without it, sub instances are detached and keep running.
    /// `skip_custom_listeners` bypasses caller-supplied deletion hooks.
    fn delete_process_instance(
        &self,
        id: &ProcessInstanceId,
        delete_reason: Option<&str>,
        cascade: bool,
        skip_custom_listeners: bool,
        externally_terminated: bool,
    ) -> ProcessResult<()>;
}

/// A caller-supplied lifecycle hook, notified once per removed instance.
///
/// Bypassed entirely when a deletion request sets
/// `skip_custom_listeners` (the trusted/administrative fast path).
pub trait DeletionListener: Send + Sync {
    fn on_delete(&self, execution: &Execution, delete_reason: Option<&str>);
}

// ── In-memory implementation ─────────────────────────────────────────

/// In-memory execution store
pub struct InMemoryExecutionManager {
    executions: RwLock<HashMap<ProcessInstanceId, Execution>>,
    /// History of completed removals, append-only
    removed: RwLock<Vec<DeletionRecord>>,
    listeners: RwLock<Vec<Arc<dyn DeletionListener>>>,
}

impl InMemoryExecutionManager {
    pub fn new() -> Self {
        Self {
            executions: RwLock::new(HashMap::new()),
            removed: RwLock::new(Vec::new()),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Put a live execution into the store
    pub fn insert(&self, execution: Execution) -> ProcessResult<()> {
        let mut executions = self.executions.write().map_err(poisoned)?;
        tracing::debug!(instance_id = %execution.id, "Execution inserted");
        executions.insert(execution.id.clone(), execution);
        Ok(())
    }

    /// Register a deletion lifecycle hook
    pub fn register_listener(&self, listener: Arc<dyn DeletionListener>) -> ProcessResult<()> {
        self.listeners.write().map_err(poisoned)?.push(listener);
        Ok(())
    }

    pub fn contains(&self, id: &ProcessInstanceId) -> bool {
        self.executions
            .read()
            .map(|e| e.contains_key(id))
            .unwrap_or(false)
    }

    /// Number of live executions in the store
    pub fn count(&self) -> usize {
        self.executions.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Completed removals, oldest first
    pub fn removal_records(&self) -> Vec<DeletionRecord> {
        self.removed
            .read()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Default for InMemoryExecutionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionManager for InMemoryExecutionManager {
    fn find_execution_by_id(&self, id: &ProcessInstanceId) -> Option<Execution> {
        self.executions
            .read()
            .ok()
            .and_then(|executions| executions.get(id).cloned())
    }

    fn delete_process_instance(
        &self,
        id: &ProcessInstanceId,
        delete_reason: Option<&str>,
        cascade: bool,
        skip_custom_listeners: bool,
        externally_terminated: bool,
    ) -> ProcessResult<()> {
        let execution = {
            let mut executions = self.executions.write().map_err(poisoned)?;
            executions
                .remove(id)
                .ok_or_else(|| ProcessEngineError::InstanceNotFound(id.clone()))?
        };

        if !skip_custom_listeners {
            let listeners = self.listeners.read().map_err(poisoned)?;
            for listener in listeners.iter() {
                listener.on_delete(&execution, delete_reason);
            }
        }

        if cascade {
            for sub_id in &execution.sub_instances {
                match self.delete_process_instance(
                    sub_id,
                    delete_reason,
                    true,
                    skip_custom_listeners,
                    externally_terminated,
                ) {
                    Ok(()) => {}
                    // Already gone; the subtree delete still succeeds.
                    Err(ProcessEngineError::InstanceNotFound(_)) => {}
                    Err(err) => return Err(err),
                }
            }
        } else {
            let mut executions = self.executions.write().map_err(poisoned)?;
            for sub_id in &execution.sub_instances {
                if let Some(sub) = executions.get_mut(sub_id) {
                    sub.super_instance = None;
                }
            }
        }

        let record = DeletionRecord::new(
            id.clone(),
            delete_reason.map(str::to_string),
            externally_terminated,
        )
        .with_removed_counts(
            1 + execution.children.len(),
            execution.variable_count(),
            execution.jobs.len(),
        );
        self.removed.write().map_err(poisoned)?.push(record);

        tracing::debug!(
            instance_id = %id,
            cascade,
            "Execution removed from store"
        );
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> ProcessEngineError {
    ProcessEngineError::Storage("execution store lock poisoned".to_string())
}
