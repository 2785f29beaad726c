//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Id, User};
use crate::errors::DomainError;
use crate::repositories::memory::MemoryStore;

use super::trait_::UserRepository;

/// Mock user repository over a shared [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MockUserRepository {
    store: Arc<MemoryStore>,
}

impl MockUserRepository {
    /// Create a repository with its own empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::conflict(format!("Email {} is already registered", email))
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<User>, DomainError> {
        let users = self.store.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.store.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.id);
        Ok(all)
    }

    async fn exists_by_id(&self, id: Id) -> Result<bool, DomainError> {
        let users = self.store.users.read().await;
        Ok(users.contains_key(&id))
    }

    async fn exists_by_email(&self, email: &str, exclude_id: Option<Id>) -> Result<bool, DomainError> {
        let users = self.store.users.read().await;
        Ok(users
            .values()
            .any(|u| u.email == email && Some(u.id) != exclude_id))
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.store.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }

        user.id = self.store.next_user_id();
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.store.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User", user.id));
        }
        if users.values().any(|u| u.email == user.email && u.id != user.id) {
            return Err(duplicate_email(&user.email));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Id) -> Result<bool, DomainError> {
        let mut users = self.store.users.write().await;
        let mut items = self.store.items.write().await;
        let mut bookings = self.store.bookings.write().await;
        let mut comments = self.store.comments.write().await;

        if users.remove(&id).is_none() {
            return Ok(false);
        }

        items.retain(|_, item| item.owner_id != id);
        bookings.retain(|_, b| b.booker_id != id && items.contains_key(&b.item_id));
        comments.retain(|_, c| c.author_id != id && items.contains_key(&c.item_id));
        Ok(true)
    }
}
