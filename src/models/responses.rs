//! Response DTOs for the password service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for GET /api/passwords/generate
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPasswordResponse {
    /// Owner the password was stored for
    pub owner: String,
    /// The generated plaintext password
    pub password: String,
}

impl GeneratedPasswordResponse {
    pub fn new(owner: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            password: password.into(),
        }
    }
}

/// Response body for POST /api/passwords/:id/verify
#[derive(Debug, Clone, Serialize)]
pub struct VerifyResponse {
    pub id: i64,
    /// Whether the plaintext matches the stored hash
    pub matches: bool,
}

/// Response body for the cache statistics endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Number of persistence-cache invalidations
    pub invalidations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub generated_entries: usize,
    pub bulk_entries: usize,
    pub by_id_entries: usize,
    pub by_tag_entries: usize,
    /// Whether the all-rows list is currently cached
    pub all_rows_cached: bool,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            invalidations: stats.invalidations,
            generated_entries: stats.generated_entries,
            bulk_entries: stats.bulk_entries,
            by_id_entries: stats.by_id_entries,
            by_tag_entries: stats.by_tag_entries,
            all_rows_cached: stats.all_rows_cached,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_response_serialize() {
        let resp = GeneratedPasswordResponse::new("user1", "password1");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["owner"], "user1");
        assert_eq!(json["password"], "password1");
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            ..CacheStats::default()
        };
        let resp = CacheStatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_cache_stats_response_zero_requests() {
        let resp = CacheStatsResponse::from(CacheStats::default());
        assert_eq!(resp.hit_rate, 0.0);
        assert!(!resp.all_rows_cached);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
