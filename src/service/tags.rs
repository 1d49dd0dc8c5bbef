//! Tag Service
//!
//! CRUD over tags. Record lists embed tag names, so every write clears the
//! persistence cache.

use std::sync::Arc;

use tracing::info;

use crate::cache::PasswordCache;
use crate::error::Result;
use crate::models::Tag;
use crate::repository::TagRepository;

pub struct TagService {
    repository: Arc<dyn TagRepository>,
    cache: Arc<PasswordCache>,
}

impl TagService {
    pub fn new(repository: Arc<dyn TagRepository>, cache: Arc<PasswordCache>) -> Self {
        Self { repository, cache }
    }

    pub async fn find_all(&self) -> Result<Vec<Tag>> {
        self.repository.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Tag>> {
        self.repository.find_by_id(id).await
    }

    pub async fn create(&self, mut tag: Tag) -> Result<Tag> {
        tag.validate()?;
        tag.id = None;
        let saved = self.repository.save(tag).await?;
        self.cache.clear_database_cache();
        info!("Created tag {:?} ({})", saved.id, saved.name);
        Ok(saved)
    }

    /// Renames the tag stored under `id`; records follow the new name.
    pub async fn update(&self, id: i64, tag: Tag) -> Result<Tag> {
        tag.validate()?;
        let saved = self.repository.update(id, tag).await?;
        self.cache.clear_database_cache();
        info!("Updated tag {} ({})", id, saved.name);
        Ok(saved)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        self.cache.clear_database_cache();
        info!("Deleted tag {}", id);
        Ok(())
    }
}
