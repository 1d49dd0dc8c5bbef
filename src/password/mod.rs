//! Password Module
//!
//! Random generation by complexity tier and one-way hashing for storage.

mod generator;
mod hasher;

pub use generator::{
    generate, validate_generation_params, Complexity, DIGITS, LETTERS, MAX_COMPLEXITY,
    MAX_LENGTH, MIN_COMPLEXITY, MIN_LENGTH, SYMBOLS,
};
pub use hasher::{Argon2Hasher, CredentialHasher};
