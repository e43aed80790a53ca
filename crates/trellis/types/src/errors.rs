//! Error types for the process engine

use crate::ProcessInstanceId;

/// Errors that can occur in process engine operations
#[derive(Debug, thiserror::Error)]
pub enum ProcessEngineError {
    /// Malformed input; the caller's error, never retried automatically
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The targeted instance does not exist (or no longer exists)
    #[error("No process instance found for id '{0}'")]
    InstanceNotFound(ProcessInstanceId),

    /// An authorization checker vetoed the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Underlying store failure; propagated unmodified to the caller
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Result type alias for process engine operations
pub type ProcessResult<T> = Result<T, ProcessEngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = ProcessEngineError::InstanceNotFound(ProcessInstanceId::new("proc-2"));
        assert_eq!(
            err.to_string(),
            "No process instance found for id 'proc-2'"
        );
    }

    #[test]
    fn test_forbidden_carries_reason() {
        let err = ProcessEngineError::Forbidden("tenant mismatch".to_string());
        assert!(err.to_string().contains("tenant mismatch"));
    }
}
