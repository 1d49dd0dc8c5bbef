//! Password Cache Module
//!
//! Five independent lookup domains kept in memory without expiry or bounds.
//! Generation domains are keyed by generation parameters and survive writes;
//! persistence domains (by id, all rows, by tag) are wiped on every write.

use std::sync::{PoisonError, RwLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::cache::keys::generated_password_key;
use crate::cache::{CacheStats, StatsRecorder};
use crate::models::PasswordRecord;
use crate::password::Complexity;

// == Password Cache ==
/// In-memory cache shared by the password and tag services.
///
/// Each domain is synchronized on its own, so concurrent callers never lose
/// updates; there is no cross-domain atomicity.
#[derive(Debug, Default)]
pub struct PasswordCache {
    /// Generated plaintext by `"{length}_{complexity}"`
    generated: DashMap<String, String>,
    /// Generated plaintext batches by bulk key
    bulk: DashMap<String, Vec<String>>,
    /// Stored records by id
    by_id: DashMap<i64, PasswordRecord>,
    /// Snapshot of every stored record
    all: RwLock<Option<Vec<PasswordRecord>>>,
    /// Stored records by tag name
    by_tag: DashMap<String, Vec<PasswordRecord>>,
    stats: StatsRecorder,
}

impl PasswordCache {
    pub fn new() -> Self {
        Self::default()
    }

    // == Generated Passwords ==
    pub fn get_generated_password(&self, length: usize, complexity: Complexity) -> Option<String> {
        let key = generated_password_key(length, complexity);
        let found = self.generated.get(&key).map(|v| v.value().clone());
        self.stats.record_lookup(&found);
        found
    }

    pub fn put_generated_password(&self, length: usize, complexity: Complexity, password: String) {
        self.generated
            .insert(generated_password_key(length, complexity), password);
    }

    /// Returns the cached password for these parameters, or stores the one
    /// built by `generate`. Concurrent misses on the same key all receive the
    /// value that was stored first.
    pub fn get_or_insert_generated<F>(
        &self,
        length: usize,
        complexity: Complexity,
        generate: F,
    ) -> String
    where
        F: FnOnce() -> String,
    {
        match self.generated.entry(generated_password_key(length, complexity)) {
            Entry::Occupied(entry) => {
                self.stats.record_hit();
                entry.get().clone()
            }
            Entry::Vacant(entry) => {
                self.stats.record_miss();
                entry.insert(generate()).value().clone()
            }
        }
    }

    // == Bulk Batches ==
    pub fn get_bulk_passwords(&self, key: &str) -> Option<Vec<String>> {
        let found = self.bulk.get(key).map(|v| v.value().clone());
        self.stats.record_lookup(&found);
        found
    }

    pub fn put_bulk_passwords(&self, key: String, passwords: Vec<String>) {
        self.bulk.insert(key, passwords);
    }

    // == Records By Id ==
    pub fn get_password_by_id(&self, id: i64) -> Option<PasswordRecord> {
        let found = self.by_id.get(&id).map(|v| v.value().clone());
        self.stats.record_lookup(&found);
        found
    }

    pub fn put_password_by_id(&self, id: i64, record: PasswordRecord) {
        self.by_id.insert(id, record);
    }

    // == All Records ==
    pub fn get_all_passwords(&self) -> Option<Vec<PasswordRecord>> {
        let found = self
            .all
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        self.stats.record_lookup(&found);
        found
    }

    pub fn put_all_passwords(&self, records: Vec<PasswordRecord>) {
        *self.all.write().unwrap_or_else(PoisonError::into_inner) = Some(records);
    }

    // == Records By Tag ==
    pub fn get_passwords_by_tag(&self, tag: &str) -> Option<Vec<PasswordRecord>> {
        let found = self.by_tag.get(tag).map(|v| v.value().clone());
        self.stats.record_lookup(&found);
        found
    }

    pub fn put_passwords_by_tag(&self, tag: String, records: Vec<PasswordRecord>) {
        self.by_tag.insert(tag, records);
    }

    // == Invalidation ==
    /// Wipes the persistence-derived domains: by id, all rows and by tag.
    ///
    /// Generated-password and bulk entries are left untouched.
    pub fn clear_database_cache(&self) {
        self.by_id.clear();
        *self.all.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.by_tag.clear();
        self.stats.record_invalidation();
        debug!("Persistence cache domains cleared");
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.stats.hits(),
            misses: self.stats.misses(),
            invalidations: self.stats.invalidations(),
            generated_entries: self.generated.len(),
            bulk_entries: self.bulk.len(),
            by_id_entries: self.by_id.len(),
            by_tag_entries: self.by_tag.len(),
            all_rows_cached: self
                .all
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some(),
        }
    }
}
