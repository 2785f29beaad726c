//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Id, Item};
use crate::errors::DomainError;
use crate::repositories::memory::MemoryStore;

use super::trait_::ItemRepository;

/// Mock item repository over a shared [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MockItemRepository {
    store: Arc<MemoryStore>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

impl Default for MockItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted(mut items: Vec<Item>) -> Vec<Item> {
    items.sort_by_key(|i| i.id);
    items
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<Item>, DomainError> {
        let items = self.store.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<Item>, DomainError> {
        let items = self.store.items.read().await;
        Ok(sorted(
            items.values().filter(|i| i.is_owned_by(owner_id)).cloned().collect(),
        ))
    }

    async fn search_available(&self, text: &str) -> Result<Vec<Item>, DomainError> {
        let needle = text.to_lowercase();
        let items = self.store.items.read().await;
        Ok(sorted(
            items
                .values()
                .filter(|i| i.available && i.matches_text(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn create(&self, mut item: Item) -> Result<Item, DomainError> {
        let mut items = self.store.items.write().await;
        item.id = self.store.next_item_id();
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.store.items.write().await;

        if !items.contains_key(&item.id) {
            return Err(DomainError::not_found("Item", item.id));
        }

        items.insert(item.id, item.clone());
        Ok(item)
    }
}
