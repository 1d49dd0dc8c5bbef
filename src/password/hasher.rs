//! Password Hashing Module
//!
//! One-way salted hashing applied to every record before it is persisted.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::Rng;

use crate::config::Config;
use crate::error::{AppError, Result};

const SALT_LEN: usize = 16;

// == Credential Hasher ==
/// Hashing primitive used by the orchestrator.
pub trait CredentialHasher: Send + Sync {
    /// Hashes `plain` into a self-describing hash string.
    fn hash(&self, plain: &str) -> Result<String>;

    /// Returns true when `plain` matches `hashed`.
    fn verify(&self, plain: &str, hashed: &str) -> bool;
}

// == Argon2 Hasher ==
/// Argon2id with a fresh random salt per hash, encoded as a PHC string.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Creates a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB
    /// * `iterations` - Number of passes
    /// * `parallelism` - Number of lanes
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::Hashing(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Creates a hasher from the configured cost parameters.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.hash_memory_kib,
            config.hash_iterations,
            config.hash_parallelism,
        )
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String> {
        let mut salt_bytes = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AppError::Hashing(format!("Salt encoding failed: {}", e)))?;

        self.argon2
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Hashing(e.to_string()))
    }

    fn verify(&self, plain: &str, hashed: &str) -> bool {
        match PasswordHash::new(hashed) {
            Ok(parsed) => self
                .argon2
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
