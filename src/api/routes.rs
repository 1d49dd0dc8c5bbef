//! API Routes
//!
//! Configures the Axum router with all password service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_password_handler, create_tag_handler, delete_password_handler,
    delete_tag_handler, generate_bulk_handler, generate_handler, get_counter_handler,
    get_password_handler, get_tag_handler, health_handler, list_passwords_handler,
    list_tags_handler, passwords_by_tag_handler, reset_counter_handler, update_password_handler,
    update_tag_handler, verify_password_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/passwords/generate", get(generate_handler))
        .route("/api/passwords/generate-bulk", post(generate_bulk_handler))
        .route(
            "/api/passwords",
            get(list_passwords_handler).post(create_password_handler),
        )
        .route(
            "/api/passwords/:id",
            get(get_password_handler)
                .put(update_password_handler)
                .delete(delete_password_handler),
        )
        .route("/api/passwords/:id/verify", post(verify_password_handler))
        .route("/api/passwords/by-tag/:name", get(passwords_by_tag_handler))
        .route("/api/tags", get(list_tags_handler).post(create_tag_handler))
        .route(
            "/api/tags/:id",
            get(get_tag_handler)
                .put(update_tag_handler)
                .delete(delete_tag_handler),
        )
        .route("/api/counter", get(get_counter_handler))
        .route("/api/counter/reset", post(reset_counter_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
