//! Repository Module
//!
//! Persistence delegate contracts for password records and tags, plus the
//! in-process store the server runs on.

mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{PasswordRecord, Tag};

pub use memory::InMemoryStore;

/// Durable storage of password records.
///
/// Records handed to `save` already carry a hashed value.
#[async_trait]
pub trait PasswordRepository: Send + Sync {
    /// Inserts a record without an id, or replaces the record with its id.
    async fn save(&self, record: PasswordRecord) -> Result<PasswordRecord>;

    /// Replaces the record stored under `id`. Unknown ids are a `NotFound`
    /// error and nothing is written.
    async fn update(&self, id: i64, record: PasswordRecord) -> Result<PasswordRecord>;

    async fn find_all(&self) -> Result<Vec<PasswordRecord>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<PasswordRecord>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Removes a record. Unknown ids are a `NotFound` error.
    async fn delete_by_id(&self, id: i64) -> Result<()>;

    async fn find_by_tag_name(&self, tag: &str) -> Result<Vec<PasswordRecord>>;
}

/// Durable storage of tags.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Inserts a tag without an id, or replaces the tag with its id.
    async fn save(&self, tag: Tag) -> Result<Tag>;

    /// Renames the tag stored under `id`. Unknown ids are a `NotFound` error.
    async fn update(&self, id: i64, tag: Tag) -> Result<Tag>;

    async fn find_all(&self) -> Result<Vec<Tag>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Tag>>;

    /// Removes a tag and detaches it from every record.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
