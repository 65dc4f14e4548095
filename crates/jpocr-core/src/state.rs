use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use jpocr_types::{CycleOutcome, CycleState};

/// Single-flight bookkeeping for capture cycles
#[derive(Debug, Default)]
pub struct CycleTracker {
    busy: AtomicBool,
    state: Mutex<CycleState>,
    completed: AtomicU64,
    failed: AtomicU64,
    rejected: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleStats {
    pub completed: u64,
    pub failed: u64,
    pub rejected: u64,
}

impl CycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single cycle slot. `None` while another cycle holds it.
    pub fn try_begin(self: &Arc<Self>) -> Option<CycleGuard> {
        if self.busy.swap(true, Ordering::SeqCst) {
            self.rejected.fetch_add(1, Ordering::Relaxed);
            return None;
        }
        Some(CycleGuard {
            tracker: Arc::clone(self),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> CycleState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn stats(&self) -> CycleStats {
        CycleStats {
            completed: self.completed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }

    fn set_state(&self, state: CycleState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }
}

/// Held for the lifetime of one cycle. Dropping it returns the tracker to idle.
#[derive(Debug)]
pub struct CycleGuard {
    tracker: Arc<CycleTracker>,
}

impl CycleGuard {
    pub fn enter(&self, state: CycleState) {
        tracing::debug!("Cycle state -> {:?}", state);
        self.tracker.set_state(state);
    }

    pub fn record(&self, outcome: &CycleOutcome) {
        let counter = if outcome.is_success() {
            &self.tracker.completed
        } else {
            &self.tracker.failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        self.tracker.set_state(CycleState::Idle);
        self.tracker.busy.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_rejected_until_guard_drops() {
        let tracker = Arc::new(CycleTracker::new());
        let guard = tracker.try_begin().unwrap();
        assert!(tracker.is_busy());
        assert!(tracker.try_begin().is_none());
        assert_eq!(tracker.stats().rejected, 1);

        drop(guard);
        assert!(!tracker.is_busy());
        assert!(tracker.try_begin().is_some());
    }

    #[test]
    fn dropping_guard_resets_state_to_idle() {
        let tracker = Arc::new(CycleTracker::new());
        {
            let guard = tracker.try_begin().unwrap();
            guard.enter(CycleState::Recognizing);
            assert_eq!(tracker.state(), CycleState::Recognizing);
        }
        assert_eq!(tracker.state(), CycleState::Idle);
    }

    #[test]
    fn outcomes_are_counted() {
        let tracker = Arc::new(CycleTracker::new());
        let guard = tracker.try_begin().unwrap();
        guard.record(&CycleOutcome::TextCopied { lines: 1, chars: 1 });
        guard.record(&CycleOutcome::EmptyResult);
        let stats = tracker.stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.failed, 1);
    }
}
