//! User directory service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Id, User, UserPatch};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Service managing registered users
pub struct UserService<U>
where
    U: UserRepository,
{
    user_repository: Arc<U>,
}

impl<U> Clone for UserService<U>
where
    U: UserRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: self.user_repository.clone(),
        }
    }
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Register a new user
    ///
    /// A blank name defaults to the email.
    ///
    /// # Errors
    ///
    /// * `DomainError::Conflict` - Email already registered
    pub async fn create_user(&self, name: &str, email: &str) -> DomainResult<User> {
        if self.user_repository.exists_by_email(email, None).await? {
            warn!(email = %email, "Rejected registration with duplicate email");
            return Err(email_taken(email));
        }

        let user = self.user_repository.create(User::new(name, email)).await?;
        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Apply a partial profile update
    ///
    /// A present name is applied as given. A present email that differs from
    /// the current one is checked for uniqueness against every other user;
    /// when it changes and the patch carries no usable name, the name is reset
    /// to the new email.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such user
    /// * `DomainError::Conflict` - New email belongs to another user
    pub async fn update_user(&self, user_id: Id, patch: UserPatch) -> DomainResult<User> {
        let mut user = self.get_user(user_id).await?;

        if let Some(name) = &patch.name {
            user.rename(name.as_str());
        }

        if let Some(email) = patch.email.filter(|email| user.email_differs(email)) {
            if self
                .user_repository
                .exists_by_email(&email, Some(user_id))
                .await?
            {
                warn!(user_id, email = %email, "Rejected profile update with duplicate email");
                return Err(email_taken(&email));
            }

            user.change_email(email.as_str());
            let name_missing = patch.name.as_deref().map_or(true, |n| n.trim().is_empty());
            if name_missing {
                user.rename(email);
            }
        }

        let user = self.user_repository.update(user).await?;
        info!(user_id, "User updated");
        Ok(user)
    }

    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such user
    pub async fn delete_user(&self, user_id: Id) -> DomainResult<()> {
        if !self.user_repository.delete(user_id).await? {
            return Err(DomainError::not_found("User", user_id));
        }
        info!(user_id, "User deleted");
        Ok(())
    }

    pub async fn get_user(&self, user_id: Id) -> DomainResult<User> {
        debug!(user_id, "Loading user");
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))
    }

    /// All users ordered by id
    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.user_repository.find_all().await
    }
}

fn email_taken(email: &str) -> DomainError {
    DomainError::conflict(format!("Email {} is already used by another user", email))
}
