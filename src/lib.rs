//! Passgen - password generation service
//!
//! Generates random passwords, stores them hashed with tags, and caches
//! generation results and persistence reads behind a small REST API.

pub mod api;
pub mod cache;
pub mod config;
pub mod counter;
pub mod error;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;

pub use api::AppState;
pub use config::Config;
