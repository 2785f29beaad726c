//! Item repository trait.

use async_trait::async_trait;

use crate::domain::entities::{Id, Item};
use crate::errors::DomainError;

/// Repository trait for Item persistence. Items are never deleted.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, id: Id) -> Result<Option<Item>, DomainError>;

    /// Items of `owner_id` ordered by id
    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<Item>, DomainError>;

    /// Available items whose name or description contains `text`,
    /// ignoring case, ordered by id
    ///
    /// Callers handle blank text; implementations may assume it is not.
    async fn search_available(&self, text: &str) -> Result<Vec<Item>, DomainError>;

    /// Persist a new item and return it with its assigned id
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    async fn update(&self, item: Item) -> Result<Item, DomainError>;
}
