//! Process lifecycle state machine.
//!
//! # States
//! - Uninitialized: registering and loading
//! - Running: inside the dispatch loop
//! - Terminated: dispatch loop left, or startup failed
//!
//! # State Transitions
//! ```text
//! Uninitialized → Running:      unit loaded
//! Running → Terminated:         shutdown signaled
//! Uninitialized → Terminated:   registration or load failure
//! ```
//!
//! There is no way back from Terminated.

use crate::error::LifecycleError;
use crate::observability::metrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Terminated,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Running => "running",
            LifecycleState::Terminated => "terminated",
        }
    }
}

/// Tracks the current lifecycle state and rejects illegal transitions.
#[derive(Debug)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Enter the dispatch loop.
    pub fn start(&mut self) -> Result<(), LifecycleError> {
        self.transition(LifecycleState::Uninitialized, LifecycleState::Running)
    }

    /// Leave the dispatch loop after shutdown.
    pub fn terminate(&mut self) -> Result<(), LifecycleError> {
        self.transition(LifecycleState::Running, LifecycleState::Terminated)
    }

    /// Abort startup.
    pub fn fail(&mut self) -> Result<(), LifecycleError> {
        self.transition(LifecycleState::Uninitialized, LifecycleState::Terminated)
    }

    fn transition(
        &mut self,
        expected: LifecycleState,
        to: LifecycleState,
    ) -> Result<(), LifecycleError> {
        if self.state != expected {
            return Err(LifecycleError {
                from: self.state,
                to,
            });
        }
        tracing::info!(from = self.state.as_str(), to = to.as_str(), "Lifecycle transition");
        self.state = to;
        metrics::record_lifecycle_state(to);
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_path() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Uninitialized);
        lifecycle.start().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Running);
        lifecycle.terminate().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Terminated);
    }

    #[test]
    fn test_failure_path() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.fail().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Terminated);
    }

    #[test]
    fn test_no_way_back() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start().unwrap();
        lifecycle.terminate().unwrap();

        let err = lifecycle.start().unwrap_err();
        assert_eq!(err.from, LifecycleState::Terminated);
        assert_eq!(err.to, LifecycleState::Running);
        assert!(lifecycle.fail().is_err());
    }

    #[test]
    fn test_cannot_fail_while_running() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start().unwrap();
        assert!(lifecycle.fail().is_err());
        assert_eq!(lifecycle.state(), LifecycleState::Running);
    }
}
