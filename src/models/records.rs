//! Stored entities
//!
//! Password records and tags as held by the persistence delegate.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// A persisted password.
///
/// `value` holds the plaintext only until the orchestrator hashes it; every
/// record that reaches the repository carries a hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Identifier, absent until persisted
    pub id: Option<i64>,
    pub value: String,
    pub owner: String,
    /// Names of the tags attached to this record
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PasswordRecord {
    pub fn new(value: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: None,
            value: value.into(),
            owner: owner.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A label that can be attached to password records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Rejects empty and whitespace-only names.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Tag name cannot be empty".to_string()));
        }
        Ok(())
    }
}
