//! Request Counter
//!
//! Process-wide count of logical passwords generated.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared atomic counter, created once at startup and injected where needed.
#[derive(Debug, Default)]
pub struct RequestCounter {
    count: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one and returns the new count.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}
