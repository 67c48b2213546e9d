//! Process-wide single-flight guard for auto-generation runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Latch ensuring at most one generation run is active per process.
///
/// Intentionally in-process only: single-instance deployment is a
/// documented operating assumption. Running multiple API instances
/// requires replacing this with a database advisory lock held for the
/// duration of the run.
#[derive(Debug, Default)]
pub struct GenerationGuard {
    running: AtomicBool,
}

impl GenerationGuard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take the latch if it is free.
    ///
    /// Returns a permit that releases the latch when dropped, or `None`
    /// when a run is already in flight. No queuing, no fairness:
    /// contending callers get an immediate refusal.
    pub fn try_acquire(self: &Arc<Self>) -> Option<GenerationPermit> {
        self.running
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Acquire)
            .is_ok()
            .then(|| GenerationPermit {
                guard: Arc::clone(self),
            })
    }

    /// Whether a run currently holds the latch.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// RAII permit for one generation run.
///
/// Dropping the permit releases the latch exactly once, on every exit
/// path of the holder, early returns and panics included.
#[derive(Debug)]
pub struct GenerationPermit {
    guard: Arc<GenerationGuard>,
}

impl Drop for GenerationPermit {
    fn drop(&mut self) {
        self.guard.running.store(false, Ordering::Release);
    }
}
