//! API Module
//!
//! HTTP handlers and routing for the password service REST API.
//!
//! # Endpoints
//! - `GET /api/passwords/generate` - Generate and store one password
//! - `POST /api/passwords/generate-bulk` - Generate and store a batch
//! - `GET|POST /api/passwords` - List or create records
//! - `GET|PUT|DELETE /api/passwords/:id` - Read, replace or delete a record
//! - `POST /api/passwords/:id/verify` - Check a plaintext against a record
//! - `GET /api/passwords/by-tag/:name` - Records carrying a tag
//! - `GET|POST /api/tags`, `GET|PUT|DELETE /api/tags/:id` - Tag CRUD
//! - `GET /api/counter`, `POST /api/counter/reset` - Request counter
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
