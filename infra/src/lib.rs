//! # Infrastructure Layer
//!
//! MySQL implementations of the ShareIt repository traits.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, schema migrations and one
//!   `MySql*Repository` per aggregate, all built on SQLx
//!
//! Repository methods report failures as [`si_core::errors::DomainError`];
//! [`InfrastructureError`] covers start-up work such as connecting and
//! migrating.

// Re-export core types for convenience
pub use si_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{
    DatabasePool, MySqlBookingRepository, MySqlCommentRepository, MySqlItemRepository, MySqlRepositories,
    MySqlUserRepository,
};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
