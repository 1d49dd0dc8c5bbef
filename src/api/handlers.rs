//! API Handlers
//!
//! HTTP request handlers for generation, password and tag CRUD, the request
//! counter, cache statistics and health.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::cache::PasswordCache;
use crate::config::Config;
use crate::counter::RequestCounter;
use crate::error::{AppError, Result};
use crate::models::{
    CacheStatsResponse, GeneratedPasswordResponse, HealthResponse, PasswordGenerationRequest,
    PasswordPayload, PasswordRecord, Tag, TagPayload, VerifyRequest, VerifyResponse,
};
use crate::password::Argon2Hasher;
use crate::repository::InMemoryStore;
use crate::service::{CountingPasswordService, PasswordGeneration, PasswordService, TagService};

/// Generation entry points with request counting applied.
pub type CountedGeneration = CountingPasswordService<Arc<PasswordService>>;

/// Application state shared across all handlers.
///
/// Every component is created once and shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Orchestrator for reads and writes of stored passwords
    pub passwords: Arc<PasswordService>,
    /// Counted wrapper around the orchestrator's generation entry points
    pub generation: Arc<CountedGeneration>,
    pub tags: Arc<TagService>,
    pub counter: Arc<RequestCounter>,
    pub cache: Arc<PasswordCache>,
}

impl AppState {
    /// Wires the services around the given collaborators.
    pub fn new(
        passwords: Arc<PasswordService>,
        tags: Arc<TagService>,
        counter: Arc<RequestCounter>,
        cache: Arc<PasswordCache>,
    ) -> Self {
        let generation = Arc::new(CountingPasswordService::new(
            passwords.clone(),
            counter.clone(),
        ));
        Self {
            passwords,
            generation,
            tags,
            counter,
            cache,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the in-memory store and Argon2 with the configured cost.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = Arc::new(InMemoryStore::new());
        let cache = Arc::new(PasswordCache::new());
        let hasher = Arc::new(Argon2Hasher::from_config(config)?);

        let passwords = Arc::new(PasswordService::new(store.clone(), cache.clone(), hasher));
        let tags = Arc::new(TagService::new(store, cache.clone()));

        Ok(Self::new(
            passwords,
            tags,
            Arc::new(RequestCounter::new()),
            cache,
        ))
    }
}

// == Generation ==

/// Handler for GET /api/passwords/generate
///
/// Generates one password (counted) and stores it hashed for the owner.
pub async fn generate_handler(
    State(state): State<AppState>,
    Query(req): Query<PasswordGenerationRequest>,
) -> Result<Json<GeneratedPasswordResponse>> {
    let (length, complexity) = req.validate()?;

    let password = state.generation.generate_password(length, complexity);
    state
        .passwords
        .create(PasswordRecord::new(password.clone(), &req.owner))
        .await?;

    Ok(Json(GeneratedPasswordResponse::new(req.owner, password)))
}

/// Handler for POST /api/passwords/generate-bulk
pub async fn generate_bulk_handler(
    State(state): State<AppState>,
    Json(requests): Json<Vec<Option<PasswordGenerationRequest>>>,
) -> Result<Json<Vec<String>>> {
    let passwords = state.generation.generate_passwords_bulk(&requests).await?;
    Ok(Json(passwords))
}

// == Passwords ==

/// Handler for GET /api/passwords
pub async fn list_passwords_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PasswordRecord>>> {
    Ok(Json(state.passwords.find_all().await?))
}

/// Handler for GET /api/passwords/:id
pub async fn get_password_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PasswordRecord>> {
    state
        .passwords
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Password {} not found", id)))
}

/// Handler for POST /api/passwords
pub async fn create_password_handler(
    State(state): State<AppState>,
    Json(payload): Json<PasswordPayload>,
) -> Result<Json<PasswordRecord>> {
    let saved = state.passwords.create(payload.into_record()).await?;
    Ok(Json(saved))
}

/// Handler for PUT /api/passwords/:id
pub async fn update_password_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PasswordPayload>,
) -> Result<Json<PasswordRecord>> {
    let saved = state.passwords.update(id, payload.into_record()).await?;
    Ok(Json(saved))
}

/// Handler for DELETE /api/passwords/:id
pub async fn delete_password_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.passwords.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /api/passwords/by-tag/:name
pub async fn passwords_by_tag_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<PasswordRecord>>> {
    Ok(Json(state.passwords.find_passwords_by_tag_name(&name).await?))
}

/// Handler for POST /api/passwords/:id/verify
pub async fn verify_password_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>> {
    let matches = state.passwords.verify(id, req.value).await?;
    Ok(Json(VerifyResponse { id, matches }))
}

// == Tags ==

/// Handler for GET /api/tags
pub async fn list_tags_handler(State(state): State<AppState>) -> Result<Json<Vec<Tag>>> {
    Ok(Json(state.tags.find_all().await?))
}

/// Handler for GET /api/tags/:id
pub async fn get_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Tag>> {
    state
        .tags
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Tag {} not found", id)))
}

/// Handler for POST /api/tags
pub async fn create_tag_handler(
    State(state): State<AppState>,
    Json(payload): Json<TagPayload>,
) -> Result<Json<Tag>> {
    Ok(Json(state.tags.create(payload.into_tag()).await?))
}

/// Handler for PUT /api/tags/:id
pub async fn update_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TagPayload>,
) -> Result<Json<Tag>> {
    Ok(Json(state.tags.update(id, payload.into_tag()).await?))
}

/// Handler for DELETE /api/tags/:id
pub async fn delete_tag_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.tags.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// == Counter, Stats, Health ==

/// Handler for GET /api/counter
///
/// Returns the count as a bare JSON number.
pub async fn get_counter_handler(State(state): State<AppState>) -> Json<u64> {
    Json(state.counter.count())
}

/// Handler for POST /api/counter/reset
pub async fn reset_counter_handler(State(state): State<AppState>) -> StatusCode {
    state.counter.reset();
    StatusCode::NO_CONTENT
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(CacheStatsResponse::from(state.cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
