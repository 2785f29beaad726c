//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema migrations
//! - Repository implementations for users, items, bookings and comments

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlBookingRepository, MySqlCommentRepository, MySqlItemRepository, MySqlRepositories, MySqlUserRepository,
};
