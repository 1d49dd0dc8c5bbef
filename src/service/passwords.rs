//! Password Service
//!
//! Coordinates cache lookups, generation, hashing, persistence and cache
//! invalidation for password records.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::cache::{bulk_key, PasswordCache};
use crate::error::{AppError, Result};
use crate::models::{PasswordGenerationRequest, PasswordRecord};
use crate::password::{self, Complexity, CredentialHasher};
use crate::repository::PasswordRepository;

// == Password Generation ==
/// Public generation entry points, the seam the request counter wraps.
#[async_trait]
pub trait PasswordGeneration: Send + Sync {
    /// Returns the cached password for these parameters, generating and
    /// caching one on a miss. Parameters must already be validated.
    fn generate_password(&self, length: usize, complexity: Complexity) -> String;

    /// Validates every entry, generates one password per entry, persists
    /// them hashed for their owners, and returns the plaintexts in order.
    async fn generate_passwords_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: PasswordGeneration + ?Sized> PasswordGeneration for Arc<T> {
    fn generate_password(&self, length: usize, complexity: Complexity) -> String {
        (**self).generate_password(length, complexity)
    }

    async fn generate_passwords_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>> {
        (**self).generate_passwords_bulk(requests).await
    }
}

// == Password Service ==
pub struct PasswordService {
    repository: Arc<dyn PasswordRepository>,
    cache: Arc<PasswordCache>,
    hasher: Arc<dyn CredentialHasher>,
}

impl PasswordService {
    pub fn new(
        repository: Arc<dyn PasswordRepository>,
        cache: Arc<PasswordCache>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            repository,
            cache,
            hasher,
        }
    }

    /// Runs the hasher on the blocking pool.
    async fn hash_value(&self, plain: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&plain))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
    }

    // == Create ==
    /// Hashes the record's value, saves it and invalidates the persistence cache.
    pub async fn create(&self, mut record: PasswordRecord) -> Result<PasswordRecord> {
        record.value = self.hash_value(record.value).await?;
        let saved = self.repository.save(record).await?;
        self.cache.clear_database_cache();
        info!("Created password {:?} for owner {}", saved.id, saved.owner);
        Ok(saved)
    }

    /// Hashes and saves every record, invalidating the persistence cache once.
    ///
    /// All values are hashed before the first save, so a hashing failure
    /// writes nothing. A save failure after earlier saves still invalidates.
    pub async fn create_bulk(&self, records: Vec<PasswordRecord>) -> Result<Vec<PasswordRecord>> {
        let mut hashed = Vec::with_capacity(records.len());
        for mut record in records {
            record.value = self.hash_value(record.value).await?;
            hashed.push(record);
        }

        let mut saved = Vec::with_capacity(hashed.len());
        for record in hashed {
            match self.repository.save(record).await {
                Ok(record) => saved.push(record),
                Err(e) => {
                    if !saved.is_empty() {
                        self.cache.clear_database_cache();
                        warn!("Bulk create failed after {} saves: {}", saved.len(), e);
                    }
                    return Err(e);
                }
            }
        }
        self.cache.clear_database_cache();
        info!("Created {} passwords in bulk", saved.len());
        Ok(saved)
    }

    // == Read ==
    pub async fn find_all(&self) -> Result<Vec<PasswordRecord>> {
        if let Some(cached) = self.cache.get_all_passwords() {
            debug!("All-rows cache hit");
            return Ok(cached);
        }
        let records = self.repository.find_all().await?;
        self.cache.put_all_passwords(records.clone());
        Ok(records)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<PasswordRecord>> {
        if let Some(cached) = self.cache.get_password_by_id(id) {
            debug!("By-id cache hit for {}", id);
            return Ok(Some(cached));
        }
        let record = self.repository.find_by_id(id).await?;
        if let Some(found) = &record {
            self.cache.put_password_by_id(id, found.clone());
        }
        Ok(record)
    }

    pub async fn find_passwords_by_tag_name(&self, tag: &str) -> Result<Vec<PasswordRecord>> {
        if let Some(cached) = self.cache.get_passwords_by_tag(tag) {
            debug!("By-tag cache hit for {}", tag);
            return Ok(cached);
        }
        let records = self.repository.find_by_tag_name(tag).await?;
        self.cache.put_passwords_by_tag(tag.to_string(), records.clone());
        Ok(records)
    }

    // == Update ==
    /// Replaces the record stored under `id` with a freshly hashed value.
    pub async fn update(&self, id: i64, mut record: PasswordRecord) -> Result<PasswordRecord> {
        if !self.repository.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Password {} not found", id)));
        }
        record.value = self.hash_value(record.value).await?;
        // Existence is checked again under the repository's write lock.
        let saved = self.repository.update(id, record).await?;
        self.cache.clear_database_cache();
        info!("Updated password {}", id);
        Ok(saved)
    }

    // == Delete ==
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        self.cache.clear_database_cache();
        info!("Deleted password {}", id);
        Ok(())
    }

    // == Verify ==
    /// Checks a plaintext against the hash stored for `id`.
    pub async fn verify(&self, id: i64, plain: String) -> Result<bool> {
        let record = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Password {} not found", id)))?;
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&plain, &record.value))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))
    }
}

#[async_trait]
impl PasswordGeneration for PasswordService {
    fn generate_password(&self, length: usize, complexity: Complexity) -> String {
        self.cache
            .get_or_insert_generated(length, complexity, || {
                debug!("Generating password for {}/{:?}", length, complexity);
                password::generate(length, complexity)
            })
    }

    async fn generate_passwords_bulk(
        &self,
        requests: &[Option<PasswordGenerationRequest>],
    ) -> Result<Vec<String>> {
        let mut validated = Vec::with_capacity(requests.len());
        for (index, entry) in requests.iter().enumerate() {
            let request = entry.as_ref().ok_or_else(|| {
                AppError::Validation(format!("Bulk request entry {} is null", index))
            })?;
            let (length, complexity) = request.validate()?;
            validated.push((request, length, complexity));
        }

        let passwords: Vec<String> = validated
            .iter()
            .map(|(_, length, complexity)| self.generate_password(*length, *complexity))
            .collect();

        // Owners are paired by position, so duplicate passwords keep their own owner.
        let records = validated
            .iter()
            .zip(&passwords)
            .map(|((request, _, _), value)| PasswordRecord::new(value.clone(), &request.owner))
            .collect();
        self.create_bulk(records).await?;

        self.cache.put_bulk_passwords(
            bulk_key(validated.iter().map(|(request, _, _)| *request)),
            passwords.clone(),
        );
        Ok(passwords)
    }
}
