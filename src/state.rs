//! Shared application state for request handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-local liveness flag.
///
/// Starts alive and can only move to dead. Nothing resets it short of a
/// process restart.
#[derive(Debug, Default)]
pub struct LivenessState {
    dead: AtomicBool,
}

impl LivenessState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the crash endpoint has been hit.
    pub fn is_dead(&self) -> bool {
        self.dead.load(Ordering::SeqCst)
    }

    /// Mark the process dead.
    ///
    /// Returns `true` only for the call that performed the alive -> dead
    /// transition, so callers can log it once.
    pub fn mark_dead(&self) -> bool {
        !self.dead.swap(true, Ordering::SeqCst)
    }
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Each router gets its own instance, so two servers in one process never
/// share a liveness flag.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub liveness: Arc<LivenessState>,
}

impl AppState {
    /// Creates a fresh state with the process alive.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_alive() {
        let state = AppState::new();
        assert!(!state.liveness.is_dead());
    }

    #[test]
    fn test_mark_dead_reports_transition_once() {
        let liveness = LivenessState::new();
        assert!(liveness.mark_dead());
        assert!(!liveness.mark_dead());
        assert!(!liveness.mark_dead());
        assert!(liveness.is_dead());
    }

    #[test]
    fn test_clones_share_flag() {
        let state = AppState::new();
        let clone = state.clone();
        clone.liveness.mark_dead();
        assert!(state.liveness.is_dead());
    }

    #[test]
    fn test_independent_states_do_not_share_flag() {
        let first = AppState::new();
        let second = AppState::new();
        first.liveness.mark_dead();
        assert!(!second.liveness.is_dead());
    }

    #[test]
    fn test_concurrent_crash_transitions_exactly_once() {
        let liveness = Arc::new(LivenessState::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let liveness = Arc::clone(&liveness);
                std::thread::spawn(move || liveness.mark_dead())
            })
            .collect();

        let transitions = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&t| t)
            .count();
        assert_eq!(transitions, 1);
        assert!(liveness.is_dead());
    }
}
