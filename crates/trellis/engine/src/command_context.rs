//! Command context: the explicit collaborator bundle for commands
//!
//! Commands receive every collaborator through this context instead of
//! reaching into ambient state. The context carries handles to the
//! execution subsystem, the operation log, and the configured checker
//! chain; the transaction boundary lives one level up, in the command
//! executor.

use crate::{CheckerChain, CommandChecker, ExecutionManager, OperationLogManager};
use std::sync::Arc;

/// Collaborator handles passed into every command execution
#[derive(Clone)]
pub struct CommandContext {
    execution_manager: Arc<dyn ExecutionManager>,
    operation_log: Arc<dyn OperationLogManager>,
    checkers: CheckerChain,
}

impl CommandContext {
    pub fn new(
        execution_manager: Arc<dyn ExecutionManager>,
        operation_log: Arc<dyn OperationLogManager>,
    ) -> Self {
        Self {
            execution_manager,
            operation_log,
            checkers: CheckerChain::new(),
        }
    }

    /// Append a checker to the authorization chain
    pub fn with_checker(mut self, checker: Arc<dyn CommandChecker>) -> Self {
        self.checkers.push(checker);
        self
    }

    /// Replace the whole checker chain
    pub fn with_checkers(mut self, checkers: CheckerChain) -> Self {
        self.checkers = checkers;
        self
    }

    pub fn execution_manager(&self) -> &dyn ExecutionManager {
        self.execution_manager.as_ref()
    }

    pub fn operation_log(&self) -> &dyn OperationLogManager {
        self.operation_log.as_ref()
    }

    pub fn checkers(&self) -> &CheckerChain {
        &self.checkers
    }
}
