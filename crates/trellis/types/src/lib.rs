//! Process Engine Domain Types for Trellis
//!
//! Trellis terminates running process instances through **guarded
//! state-transition commands**: authorization runs before any side
//! effect, the mutation is delegated to the execution subsystem, and
//! every mutation leaves one immutable audit entry.
//!
//! # Key Concepts
//!
//! - **Execution**: The live engine record of a running process
//!   instance, owning its tree of child scope executions, variables,
//!   jobs, and incidents.
//! - **DeletionRequest**: The immutable parameters of one termination
//!   request (reason, listener bypass, external-termination marker).
//! - **DeletionRecord**: The durable trace the execution subsystem
//!   writes after a completed removal.
//! - **OperationLogEntry**: An append-only audit record of one
//!   state-changing operation. Deletions log the fact of removal via a
//!   single no-op [`PropertyChange`], never field-level diffs.
//!
//! # Design Principles
//!
//! 1. Authorization is pluggable and runs before any side effect.
//! 2. Mutations are idempotent-safe against a missing target.
//! 3. Every state mutation is auditable: exactly one operation log
//!    entry per successful deletion, written only after confirmed
//!    removal.

#![deny(unsafe_code)]

mod deletion;
mod errors;
mod execution;
mod oplog;

pub use deletion::*;
pub use errors::*;
pub use execution::*;
pub use oplog::*;
