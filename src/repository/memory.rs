//! In-memory persistence delegate
//!
//! Keeps records and tags in ordered maps behind a single async lock, with
//! ids assigned from 1 upwards.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{PasswordRecord, Tag};
use crate::repository::{PasswordRepository, TagRepository};

#[derive(Debug, Default)]
struct Tables {
    passwords: BTreeMap<i64, PasswordRecord>,
    tags: BTreeMap<i64, Tag>,
    last_password_id: i64,
    last_tag_id: i64,
}

impl Tables {
    fn next_password_id(&mut self) -> i64 {
        self.last_password_id += 1;
        self.last_password_id
    }

    fn next_tag_id(&mut self) -> i64 {
        self.last_tag_id += 1;
        self.last_tag_id
    }

    fn tag_named(&self, name: &str) -> Option<&Tag> {
        self.tags.values().find(|t| t.name == name)
    }

    /// Creates any tag the record names that does not exist yet.
    fn ensure_tags(&mut self, names: &[String]) {
        for name in names {
            if self.tag_named(name).is_none() {
                let id = self.next_tag_id();
                self.tags.insert(
                    id,
                    Tag {
                        id: Some(id),
                        name: name.clone(),
                    },
                );
                debug!("Created tag {} ({}) from record reference", id, name);
            }
        }
    }

    /// Inserts a record, or replaces the one under its id.
    fn store_password(&mut self, mut record: PasswordRecord) -> PasswordRecord {
        record.tags = dedup_preserving_order(std::mem::take(&mut record.tags));
        self.ensure_tags(&record.tags);

        let id = match record.id {
            Some(id) => {
                self.last_password_id = self.last_password_id.max(id);
                id
            }
            None => self.next_password_id(),
        };
        record.id = Some(id);
        self.passwords.insert(id, record.clone());
        record
    }

    /// Inserts a tag, or renames the one under its id and every reference to it.
    fn store_tag(&mut self, mut tag: Tag) -> Result<Tag> {
        if let Some(existing) = self.tag_named(&tag.name) {
            if existing.id != tag.id {
                return Err(AppError::Validation(format!(
                    "Tag '{}' already exists",
                    tag.name
                )));
            }
        }

        let id = match tag.id {
            Some(id) => {
                let previous = self.tags.get(&id).map(|t| t.name.clone());
                if let Some(old_name) = previous.filter(|old| *old != tag.name) {
                    for record in self.passwords.values_mut() {
                        for name in record.tags.iter_mut().filter(|n| **n == old_name) {
                            *name = tag.name.clone();
                        }
                    }
                }
                self.last_tag_id = self.last_tag_id.max(id);
                id
            }
            None => self.next_tag_id(),
        };
        tag.id = Some(id);
        self.tags.insert(id, tag.clone());
        Ok(tag)
    }
}

/// Store implementing both repository contracts over shared tables.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn dedup_preserving_order(names: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(names.len());
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

#[async_trait]
impl PasswordRepository for InMemoryStore {
    async fn save(&self, record: PasswordRecord) -> Result<PasswordRecord> {
        let mut tables = self.tables.write().await;
        Ok(tables.store_password(record))
    }

    async fn update(&self, id: i64, mut record: PasswordRecord) -> Result<PasswordRecord> {
        let mut tables = self.tables.write().await;
        if !tables.passwords.contains_key(&id) {
            return Err(AppError::NotFound(format!("Password {} not found", id)));
        }
        record.id = Some(id);
        Ok(tables.store_password(record))
    }

    async fn find_all(&self) -> Result<Vec<PasswordRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.passwords.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PasswordRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.passwords.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let tables = self.tables.read().await;
        Ok(tables.passwords.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .passwords
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Password {} not found", id)))
    }

    async fn find_by_tag_name(&self, tag: &str) -> Result<Vec<PasswordRecord>> {
        let tables = self.tables.read().await;
        Ok(tables
            .passwords
            .values()
            .filter(|r| r.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TagRepository for InMemoryStore {
    async fn save(&self, tag: Tag) -> Result<Tag> {
        let mut tables = self.tables.write().await;
        tables.store_tag(tag)
    }

    async fn update(&self, id: i64, mut tag: Tag) -> Result<Tag> {
        let mut tables = self.tables.write().await;
        if !tables.tags.contains_key(&id) {
            return Err(AppError::NotFound(format!("Tag {} not found", id)));
        }
        tag.id = Some(id);
        tables.store_tag(tag)
    }

    async fn find_all(&self) -> Result<Vec<Tag>> {
        let tables = self.tables.read().await;
        Ok(tables.tags.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>> {
        let tables = self.tables.read().await;
        Ok(tables.tags.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        let mut tables = self.tables.write().await;
        let removed = tables
            .tags
            .remove(&id)
            .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))?;

        for record in tables.passwords.values_mut() {
            record.tags.retain(|name| *name != removed.name);
        }
        Ok(())
    }
}
