//! Trellis Process Engine runtime
//!
//! The engine mutates shared orchestration state through **guarded
//! commands**: every state transition validates its input, resolves its
//! target, runs the configured authorization chain, delegates the
//! mutation to the execution subsystem, and appends one immutable
//! operation log entry — in that order, short-circuiting on the first
//! failure.
//!
//! # Key Principle
//!
//! **Audit after confirmed mutation, never before.** A command that
//! fails at any gate leaves the system exactly as it was: no partial
//! deletion, no orphan audit entry.
//!
//! # Architecture
//!
//! Commands compose specialized components through a [`CommandContext`]:
//!
//! - [`ExecutionManager`] — Resolves instance ids to live executions and
//!   performs cascading removal
//! - [`CheckerChain`] — Ordered authorization checkers with
//!   short-circuit-on-first-veto semantics
//! - [`OperationLogManager`] — Append-only audit trail of state
//!   mutations
//! - [`CommandExecutor`] — Runs commands inside the ambient
//!   [`UnitOfWork`], committing on success and rolling back on failure
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use trellis_engine::{
//!     CommandContext, CommandExecutor, DeleteProcessInstanceCommand,
//!     ExecutionManager, InMemoryExecutionManager, InMemoryOperationLog,
//! };
//! use trellis_types::{DeletionRequest, Execution, ProcessInstanceId};
//!
//! let manager = Arc::new(InMemoryExecutionManager::new());
//! let log = Arc::new(InMemoryOperationLog::new());
//! manager
//!     .insert(Execution::new(
//!         ProcessInstanceId::new("order-7"),
//!         "order-fulfillment",
//!     ))
//!     .unwrap();
//!
//! let context = CommandContext::new(manager.clone(), log.clone());
//! let executor = CommandExecutor::new(context);
//!
//! let command = DeleteProcessInstanceCommand::new(
//!     DeletionRequest::new(ProcessInstanceId::new("order-7"))
//!         .with_reason("duplicate order"),
//! );
//! executor.execute(&command).unwrap();
//!
//! assert!(manager
//!     .find_execution_by_id(&ProcessInstanceId::new("order-7"))
//!     .is_none());
//! assert_eq!(log.count(), 1);
//! ```

#![deny(unsafe_code)]

pub mod command_checker;
pub mod command_context;
pub mod command_executor;
pub mod commands;
pub mod execution_manager;
pub mod operation_log;

// Re-export main types
pub use command_checker::{CheckerChain, CommandChecker};
pub use command_context::CommandContext;
pub use command_executor::{Command, CommandExecutor, NoopUnitOfWork, UnitOfWork};
pub use commands::{DeleteProcessInstanceCommand, DeleteProcessInstancesCommand};
pub use execution_manager::{DeletionListener, ExecutionManager, InMemoryExecutionManager};
pub use operation_log::{InMemoryOperationLog, OperationLogManager};
