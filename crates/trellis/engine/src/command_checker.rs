//! Command checkers: pluggable authorization rules
//!
//! Checkers are evaluated in order. The first checker that vetoes
//! halts the chain; later checkers are never consulted. The engine
//! does not define concrete rules — they are injected by engine
//! configuration.

use std::sync::Arc;
use trellis_types::{Execution, ProcessResult};

/// A pluggable authorization rule evaluated before a state mutation.
///
/// Return `Forbidden` with the veto reason to abort the operation.
pub trait CommandChecker: Send + Sync {
    fn check_delete_process_instance(&self, execution: &Execution) -> ProcessResult<()>;
}

/// An ordered chain of command checkers with short-circuit semantics
#[derive(Clone, Default)]
pub struct CheckerChain {
    checkers: Vec<Arc<dyn CommandChecker>>,
}

impl CheckerChain {
    /// Create an empty chain (allows everything)
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    pub fn with_checker(mut self, checker: Arc<dyn CommandChecker>) -> Self {
        self.checkers.push(checker);
        self
    }

    pub fn push(&mut self, checker: Arc<dyn CommandChecker>) {
        self.checkers.push(checker);
    }

    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Run every checker in order, stopping at the first veto
    pub fn check_delete_process_instance(&self, execution: &Execution) -> ProcessResult<()> {
        for checker in &self.checkers {
            checker.check_delete_process_instance(execution)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use trellis_types::{ProcessEngineError, ProcessInstanceId};

    struct CountingChecker {
        calls: AtomicUsize,
        deny: bool,
    }

    impl CountingChecker {
        fn allowing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                deny: false,
            }
        }

        fn denying() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                deny: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CommandChecker for CountingChecker {
        fn check_delete_process_instance(&self, _execution: &Execution) -> ProcessResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.deny {
                Err(ProcessEngineError::Forbidden(
                    "deletion not permitted".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }

    fn make_execution() -> Execution {
        Execution::new(ProcessInstanceId::new("proc-1"), "order-fulfillment")
    }

    #[test]
    fn test_empty_chain_allows() {
        let chain = CheckerChain::new();
        assert!(chain.is_empty());
        assert!(chain.check_delete_process_instance(&make_execution()).is_ok());
    }

    #[test]
    fn test_all_checkers_consulted_on_allow() {
        let first = Arc::new(CountingChecker::allowing());
        let second = Arc::new(CountingChecker::allowing());
        let chain = CheckerChain::new()
            .with_checker(first.clone())
            .with_checker(second.clone());

        assert_eq!(chain.len(), 2);
        chain.check_delete_process_instance(&make_execution()).unwrap();
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
    }

    #[test]
    fn test_first_veto_short_circuits() {
        let first = Arc::new(CountingChecker::allowing());
        let second = Arc::new(CountingChecker::denying());
        let third = Arc::new(CountingChecker::allowing());
        let chain = CheckerChain::new()
            .with_checker(first.clone())
            .with_checker(second.clone())
            .with_checker(third.clone());

        let result = chain.check_delete_process_instance(&make_execution());
        assert!(matches!(result, Err(ProcessEngineError::Forbidden(_))));
        assert_eq!(first.calls(), 1);
        assert_eq!(second.calls(), 1);
        assert_eq!(third.calls(), 0);
    }
}
