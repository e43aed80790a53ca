//! Operation log manager: the append-only audit trail
//!
//! One entry per state-changing operation. Entries are never updated
//! or deleted; the manager exposes append and query surfaces only.

use std::sync::RwLock;
use trellis_types::{
    OperationLogEntry, OperationType, ProcessEngineError, ProcessInstanceId, ProcessResult,
    PropertyChange,
};

/// Append-only recorder of state-changing operations
pub trait OperationLogManager: Send + Sync {
    fn log_process_instance_operation(
        &self,
        operation: OperationType,
        entity_id: &ProcessInstanceId,
        old_value: Option<String>,
        new_value: Option<String>,
        changes: Vec<PropertyChange>,
    ) -> ProcessResult<()>;
}

/// In-memory operation log
pub struct InMemoryOperationLog {
    entries: RwLock<Vec<OperationLogEntry>>,
}

impl InMemoryOperationLog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// All entries, oldest first
    pub fn entries(&self) -> Vec<OperationLogEntry> {
        self.entries.read().map(|e| e.clone()).unwrap_or_default()
    }

    /// Entries recorded against one entity
    pub fn entries_for(&self, entity_id: &ProcessInstanceId) -> Vec<OperationLogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| &e.entity_id == entity_id)
            .collect()
    }

    pub fn count(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}

impl Default for InMemoryOperationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationLogManager for InMemoryOperationLog {
    fn log_process_instance_operation(
        &self,
        operation: OperationType,
        entity_id: &ProcessInstanceId,
        old_value: Option<String>,
        new_value: Option<String>,
        changes: Vec<PropertyChange>,
    ) -> ProcessResult<()> {
        let entry = OperationLogEntry::new(operation, entity_id.clone(), changes)
            .with_values(old_value, new_value);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ProcessEngineError::Storage("operation log lock poisoned".to_string()))?;
        tracing::trace!(
            entity_id = %entity_id,
            operation = %operation,
            "Operation logged"
        );
        entries.push(entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_log() -> InMemoryOperationLog {
        InMemoryOperationLog::new()
    }

    #[test]
    fn test_append_and_query() {
        let log = make_log();
        log.log_process_instance_operation(
            OperationType::Delete,
            &ProcessInstanceId::new("proc-1"),
            None,
            None,
            vec![PropertyChange::empty()],
        )
        .unwrap();

        assert_eq!(log.count(), 1);
        let entries = log.entries();
        assert_eq!(entries[0].operation_type, OperationType::Delete);
        assert_eq!(entries[0].entity_id, ProcessInstanceId::new("proc-1"));
        assert_eq!(entries[0].property_changes, vec![PropertyChange::empty()]);
    }

    #[test]
    fn test_entries_for_filters_by_entity() {
        let log = make_log();
        for id in ["proc-1", "proc-2", "proc-1"] {
            log.log_process_instance_operation(
                OperationType::Delete,
                &ProcessInstanceId::new(id),
                None,
                None,
                vec![PropertyChange::empty()],
            )
            .unwrap();
        }

        assert_eq!(log.entries_for(&ProcessInstanceId::new("proc-1")).len(), 2);
        assert_eq!(log.entries_for(&ProcessInstanceId::new("proc-2")).len(), 1);
        assert!(log.entries_for(&ProcessInstanceId::new("proc-3")).is_empty());
    }

    #[test]
    fn test_returned_entries_are_clones() {
        let log = make_log();
        log.log_process_instance_operation(
            OperationType::Delete,
            &ProcessInstanceId::new("proc-1"),
            None,
            None,
            vec![PropertyChange::empty()],
        )
        .unwrap();

        let mut entries = log.entries();
        entries.clear();

        // The log itself is untouched; there is no mutation surface.
        assert_eq!(log.count(), 1);
    }

    #[test]
    fn test_entry_serde_round_trip_through_log() {
        let log = make_log();
        log.log_process_instance_operation(
            OperationType::Delete,
            &ProcessInstanceId::new("proc-1"),
            None,
            None,
            vec![PropertyChange::empty()],
        )
        .unwrap();

        let entry = &log.entries()[0];
        let json = serde_json::to_string(entry).unwrap();
        let back: OperationLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entity_id, entry.entity_id);
        assert!(back.property_changes[0].is_empty());
    }
}
