//! Cache Module
//!
//! Provides the in-memory password cache with coarse invalidation on writes.

mod keys;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use keys::{bulk_key, generated_password_key, BULK_KEY_DELIMITER};
pub use stats::{CacheStats, StatsRecorder};
pub use store::PasswordCache;
