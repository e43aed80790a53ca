//! Command executor: the transaction boundary around commands
//!
//! Every command runs inside one ambient unit of work supplied by the
//! surrounding infrastructure. The executor makes the all-or-nothing
//! contract observable: a command that returns `Ok` is committed, a
//! command that fails at any gate is rolled back, and the command's
//! result passes through unchanged. Retry policy belongs to the
//! external interceptor, not here.

use crate::CommandContext;
use std::sync::Arc;
use trellis_types::ProcessResult;

/// A guarded state-transition command
pub trait Command {
    type Output;

    fn execute(&self, context: &CommandContext) -> ProcessResult<Self::Output>;
}

/// The ambient transaction supplied by the surrounding infrastructure
pub trait UnitOfWork: Send + Sync {
    fn commit(&self);
    fn rollback(&self);
}

/// Unit of work for contexts without a real transaction manager
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopUnitOfWork;

impl UnitOfWork for NoopUnitOfWork {
    fn commit(&self) {}

    fn rollback(&self) {}
}

/// Runs commands against a context inside a unit of work
pub struct CommandExecutor {
    context: CommandContext,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CommandExecutor {
    pub fn new(context: CommandContext) -> Self {
        Self {
            context,
            unit_of_work: Arc::new(NoopUnitOfWork),
        }
    }

    pub fn with_unit_of_work(mut self, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        self.unit_of_work = unit_of_work;
        self
    }

    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Execute one command: commit on success, roll back on failure
    pub fn execute<C: Command>(&self, command: &C) -> ProcessResult<C::Output> {
        match command.execute(&self.context) {
            Ok(output) => {
                self.unit_of_work.commit();
                Ok(output)
            }
            Err(err) => {
                self.unit_of_work.rollback();
                tracing::debug!(error = %err, "Command rolled back");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryExecutionManager, InMemoryOperationLog};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trellis_types::ProcessEngineError;

    struct RecordingUnitOfWork {
        commits: AtomicUsize,
        rollbacks: AtomicUsize,
    }

    impl RecordingUnitOfWork {
        fn new() -> Self {
            Self {
                commits: AtomicUsize::new(0),
                rollbacks: AtomicUsize::new(0),
            }
        }
    }

    impl UnitOfWork for RecordingUnitOfWork {
        fn commit(&self) {
            self.commits.fetch_add(1, Ordering::SeqCst);
        }

        fn rollback(&self) {
            self.rollbacks.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct SucceedingCommand;

    impl Command for SucceedingCommand {
        type Output = u32;

        fn execute(&self, _context: &CommandContext) -> trellis_types::ProcessResult<u32> {
            Ok(42)
        }
    }

    struct FailingCommand;

    impl Command for FailingCommand {
        type Output = ();

        fn execute(&self, _context: &CommandContext) -> trellis_types::ProcessResult<()> {
            Err(ProcessEngineError::Storage("store unavailable".to_string()))
        }
    }

    fn make_executor(unit_of_work: Arc<RecordingUnitOfWork>) -> CommandExecutor {
        let context = CommandContext::new(
            Arc::new(InMemoryExecutionManager::new()),
            Arc::new(InMemoryOperationLog::new()),
        );
        CommandExecutor::new(context).with_unit_of_work(unit_of_work)
    }

    #[test]
    fn test_commit_on_success() {
        let unit_of_work = Arc::new(RecordingUnitOfWork::new());
        let executor = make_executor(unit_of_work.clone());

        let output = executor.execute(&SucceedingCommand).unwrap();
        assert_eq!(output, 42);
        assert_eq!(unit_of_work.commits.load(Ordering::SeqCst), 1);
        assert_eq!(unit_of_work.rollbacks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_rollback_on_failure() {
        let unit_of_work = Arc::new(RecordingUnitOfWork::new());
        let executor = make_executor(unit_of_work.clone());

        let result = executor.execute(&FailingCommand);
        assert!(matches!(result, Err(ProcessEngineError::Storage(_))));
        assert_eq!(unit_of_work.commits.load(Ordering::SeqCst), 0);
        assert_eq!(unit_of_work.rollbacks.load(Ordering::SeqCst), 1);
    }
}
