//! Deletion of a single running process instance
//!
//! Common logic for process instance deletion operations: permission
//! checking and single process instance removal. Four fail-fast gates
//! in strict order — input validation, lookup, authorization, removal —
//! then exactly one operation log entry once the removal is confirmed.

use crate::{Command, CommandContext};
use trellis_types::{
    DeletionRequest, OperationType, ProcessEngineError, ProcessResult, PropertyChange,
};

/// Terminates one running process instance.
///
/// Authorization runs against the resolved execution before any side
/// effect. The removal never cascades into called sub process
/// instances; that is the subtree-wide deletion path, not this one.
#[derive(Clone, Debug)]
pub struct DeleteProcessInstanceCommand {
    request: DeletionRequest,
}

impl DeleteProcessInstanceCommand {
    pub fn new(request: DeletionRequest) -> Self {
        Self { request }
    }

    pub fn request(&self) -> &DeletionRequest {
        &self.request
    }
}

impl Command for DeleteProcessInstanceCommand {
    type Output = ();

    fn execute(&self, context: &CommandContext) -> ProcessResult<()> {
        delete_process_instance(context, &self.request)
    }
}

/// The shared guarded deletion routine backing both the single- and the
/// multi-instance command.
pub(crate) fn delete_process_instance(
    context: &CommandContext,
    request: &DeletionRequest,
) -> ProcessResult<()> {
    let instance_id = &request.process_instance_id;
    if instance_id.0.is_empty() {
        return Err(ProcessEngineError::BadRequest(
            "process instance id must not be empty".to_string(),
        ));
    }

    // fetch process instance
    let execution = context
        .execution_manager()
        .find_execution_by_id(instance_id)
        .ok_or_else(|| ProcessEngineError::InstanceNotFound(instance_id.clone()))?;

    context.checkers().check_delete_process_instance(&execution)?;

    // delete process instance; never as a subtree-wide cascade
    context.execution_manager().delete_process_instance(
        instance_id,
        request.delete_reason.as_deref(),
        false,
        request.skip_custom_listeners,
        request.externally_terminated,
    )?;

    // audit only after confirmed removal
    context.operation_log().log_process_instance_operation(
        OperationType::Delete,
        instance_id,
        None,
        None,
        vec![PropertyChange::empty()],
    )?;

    tracing::info!(
        instance_id = %instance_id,
        externally_terminated = request.externally_terminated,
        "Process instance deleted"
    );
    Ok(())
}
