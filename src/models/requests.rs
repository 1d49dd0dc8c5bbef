//! Request DTOs for the password service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PasswordRecord, Tag};
use crate::password::{validate_generation_params, Complexity};

/// One entry of a bulk generation request (POST /api/passwords/generate-bulk)
///
/// Also used as the query string of GET /api/passwords/generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationRequest {
    /// Requested length, 4 to 30
    pub length: i64,
    /// Complexity tier, 1 to 3
    pub complexity: i64,
    /// Owner the generated password is stored for
    pub owner: String,
}

impl PasswordGenerationRequest {
    pub fn new(length: i64, complexity: i64, owner: impl Into<String>) -> Self {
        Self {
            length,
            complexity,
            owner: owner.into(),
        }
    }

    /// Validates length and complexity, returning the typed parameters.
    pub fn validate(&self) -> Result<(usize, Complexity)> {
        validate_generation_params(self.length, self.complexity)
    }
}

/// Request body for creating or updating a password record
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordPayload {
    /// Plaintext value, hashed before it is stored
    pub value: String,
    pub owner: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PasswordPayload {
    /// Converts the payload into an unsaved record.
    pub fn into_record(self) -> PasswordRecord {
        PasswordRecord::new(self.value, self.owner).with_tags(self.tags)
    }
}

/// Request body for checking a plaintext against a stored hash
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyRequest {
    pub value: String,
}

/// Request body for creating or updating a tag
#[derive(Debug, Clone, Deserialize)]
pub struct TagPayload {
    pub name: String,
}

impl TagPayload {
    pub fn into_tag(self) -> Tag {
        Tag::new(self.name)
    }
}
