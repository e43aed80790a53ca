//! Engine commands: guarded state transitions over running instances

mod delete_process_instance;
mod delete_process_instances;

pub use delete_process_instance::DeleteProcessInstanceCommand;
pub use delete_process_instances::DeleteProcessInstancesCommand;
