//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::{Id, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations assign the identifier on [`UserRepository::create`] and
/// enforce email uniqueness at the storage level, reporting a duplicate as
/// [`DomainError::Conflict`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by identifier
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, DomainError>;

    /// All users ordered by id
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn exists_by_id(&self, id: Id) -> Result<bool, DomainError>;

    /// Check if `email` is taken by any user other than `exclude_id`
    ///
    /// # Arguments
    /// * `email` - Address to look up
    /// * `exclude_id` - User whose own row is ignored, if any
    async fn exists_by_email(&self, email: &str, exclude_id: Option<Id>) -> Result<bool, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user carrying its assigned id
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user together with their items, bookings and comments
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Id) -> Result<bool, DomainError>;
}
