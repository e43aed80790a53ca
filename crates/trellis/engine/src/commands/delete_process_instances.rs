//! Batch deletion of running process instances
//!
//! Runs the same guarded routine as the single-instance command over an
//! id list, failing fast on the first error. Instances already deleted
//! when a later id fails stay deleted and logged; whether the whole
//! batch is rolled back is the ambient transaction's decision.

use crate::commands::delete_process_instance::delete_process_instance;
use crate::{Command, CommandContext};
use trellis_types::{DeletionRequest, ProcessEngineError, ProcessInstanceId, ProcessResult};

/// Terminates a list of running process instances, in order
#[derive(Clone, Debug)]
pub struct DeleteProcessInstancesCommand {
    process_instance_ids: Vec<ProcessInstanceId>,
    delete_reason: Option<String>,
    skip_custom_listeners: bool,
    externally_terminated: bool,
}

impl DeleteProcessInstancesCommand {
    pub fn new(process_instance_ids: Vec<ProcessInstanceId>) -> Self {
        Self {
            process_instance_ids,
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

impl Command for DeleteProcessInstancesCommand {
    type Output = ();

    fn execute(&self, context: &CommandContext) -> ProcessResult<()> {
        if self.process_instance_ids.is_empty() {
            return Err(ProcessEngineError::BadRequest(
                "process instance ids must not be empty".to_string(),
            ));
        }

        for id in &self.process_instance_ids {
            let mut request = DeletionRequest::new(id.clone())
                .with_skip_custom_listeners(self.skip_custom_listeners)
                .with_externally_terminated(self.externally_terminated);
            if let Some(reason) = &self.delete_reason {
                request = request.with_reason(reason.clone());
            }
            delete_process_instance(context, &request)?;
        }
        Ok(())
    }
}
