//! MySQL repository implementations

pub mod booking_repository_impl;
pub mod comment_repository_impl;
pub mod item_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use comment_repository_impl::MySqlCommentRepository;
pub use item_repository_impl::MySqlItemRepository;
pub use user_repository_impl::MySqlUserRepository;

use std::sync::Arc;

use sqlx::mysql::MySqlRow;
use sqlx::{Decode, MySql, MySqlPool, Row, Type};

use si_core::errors::DomainError;

/// The four MySQL repositories sharing one pool
#[derive(Clone)]
pub struct MySqlRepositories {
    pub users: Arc<MySqlUserRepository>,
    pub items: Arc<MySqlItemRepository>,
    pub bookings: Arc<MySqlBookingRepository>,
    pub comments: Arc<MySqlCommentRepository>,
}

impl MySqlRepositories {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            users: Arc::new(MySqlUserRepository::new(pool.clone())),
            items: Arc::new(MySqlItemRepository::new(pool.clone())),
            bookings: Arc::new(MySqlBookingRepository::new(pool.clone())),
            comments: Arc::new(MySqlCommentRepository::new(pool)),
        }
    }
}

/// Reads one column, reporting a missing or mistyped value as internal
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn query_failed(e: sqlx::Error) -> DomainError {
    tracing::error!("Database query failed: {}", e);
    DomainError::internal(format!("Database query failed: {}", e))
}

/// Auto-increment id of the row just inserted
pub(crate) fn inserted_id(last_insert_id: u64) -> Result<i64, DomainError> {
    i64::try_from(last_insert_id)
        .map_err(|_| DomainError::internal(format!("Inserted id {} out of range", last_insert_id)))
}
