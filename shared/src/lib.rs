//! Shared utilities and common types for the ShareIt server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error response structures
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
    StorageBackend, StorageConfig,
};
pub use types::{error_codes, ErrorResponse, HealthResponse, Id};
