//! Cache Statistics Module
//!
//! Tracks lookup hits, misses and persistence-cache invalidations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time snapshot of cache metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of `clear_database_cache` calls
    pub invalidations: u64,
    pub generated_entries: usize,
    pub bulk_entries: usize,
    pub by_id_entries: usize,
    pub by_tag_entries: usize,
    pub all_rows_cached: bool,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Recorder ==
/// Lock-free counters shared by every cache domain.
#[derive(Debug, Default)]
pub struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    invalidations: AtomicU64,
}

impl StatsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a hit or a miss depending on whether the lookup found a value.
    pub fn record_lookup<T>(&self, found: &Option<T>) {
        if found.is_some() {
            self.record_hit();
        } else {
            self.record_miss();
        }
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalidation(&self) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn invalidations(&self) -> u64 {
        self.invalidations.load(Ordering::Relaxed)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_new() {
        let recorder = StatsRecorder::new();
        assert_eq!(recorder.hits(), 0);
        assert_eq!(recorder.misses(), 0);
        assert_eq!(recorder.invalidations(), 0);
    }

    #[test]
    fn test_record_lookup() {
        let recorder = StatsRecorder::new();
        recorder.record_lookup(&Some("value"));
        recorder.record_lookup(&Some("value"));
        recorder.record_lookup::<String>(&None);
        assert_eq!(recorder.hits(), 2);
        assert_eq!(recorder.misses(), 1);
    }

    #[test]
    fn test_record_invalidation() {
        let recorder = StatsRecorder::new();
        recorder.record_invalidation();
        recorder.record_invalidation();
        assert_eq!(recorder.invalidations(), 2);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let stats = CacheStats {
            hits: 1,
            misses: 1,
            ..CacheStats::default()
        };
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_hit_rate_all_hits() {
        let stats = CacheStats {
            hits: 3,
            ..CacheStats::default()
        };
        assert_eq!(stats.hit_rate(), 1.0);
    }
}
