//! Request, response and record models for the password service
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP bodies, plus the stored entities.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{PasswordRecord, Tag};
pub use requests::{PasswordGenerationRequest, PasswordPayload, TagPayload, VerifyRequest};
pub use responses::{
    CacheStatsResponse, ErrorResponse, GeneratedPasswordResponse, HealthResponse, VerifyResponse,
};
