//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Argon2 memory cost in KiB
    pub hash_memory_kib: u32,
    /// Argon2 iteration count
    pub hash_iterations: u32,
    /// Argon2 lane count
    pub hash_parallelism: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `HASH_MEMORY_KIB` - Argon2 memory cost in KiB (default: 19456)
    /// - `HASH_ITERATIONS` - Argon2 iterations (default: 2)
    /// - `HASH_PARALLELISM` - Argon2 lanes (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            hash_memory_kib: env_or("HASH_MEMORY_KIB", defaults.hash_memory_kib),
            hash_iterations: env_or("HASH_ITERATIONS", defaults.hash_iterations),
            hash_parallelism: env_or("HASH_PARALLELISM", defaults.hash_parallelism),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            hash_memory_kib: 19456,
            hash_iterations: 2,
            hash_parallelism: 1,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, fallback: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
