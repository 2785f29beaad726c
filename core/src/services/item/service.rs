//! Item catalog service implementation

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{Booking, Id, Item, ItemPatch};
use crate::domain::value_objects::{CommentView, ItemDetails};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

/// Service for items listed by owners
pub struct ItemService<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    user_repository: Arc<U>,
    item_repository: Arc<I>,
    booking_repository: Arc<B>,
    comment_repository: Arc<C>,
}

impl<U, I, B, C> ItemService<U, I, B, C>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
    C: CommentRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        item_repository: Arc<I>,
        booking_repository: Arc<B>,
        comment_repository: Arc<C>,
    ) -> Self {
        Self {
            user_repository,
            item_repository,
            booking_repository,
            comment_repository,
        }
    }

    /// List a new item for its owner
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - Owner does not exist
    pub async fn create_item(&self, item: Item) -> DomainResult<Item> {
        if !self.user_repository.exists_by_id(item.owner_id).await? {
            return Err(DomainError::not_found("User", item.owner_id));
        }

        let item = self.item_repository.create(item).await?;
        info!(item_id = item.id, owner_id = item.owner_id, "Item created");
        Ok(item)
    }

    /// Apply the fields present in `patch`
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - Item or requester does not exist
    /// * `DomainError::AccessDenied` - Requester is not the owner
    pub async fn update_item(&self, item_id: Id, patch: ItemPatch, requester_id: Id) -> DomainResult<Item> {
        let mut item = self.find_item(item_id).await?;

        if !self.user_repository.exists_by_id(requester_id).await? {
            return Err(DomainError::not_found("User", requester_id));
        }
        if !item.is_owned_by(requester_id) {
            warn!(item_id, requester_id, "Rejected item update by non-owner");
            return Err(DomainError::access_denied("Only the owner can edit an item"));
        }

        item.apply(patch);
        let item = self.item_repository.update(item).await?;
        info!(item_id, "Item updated");
        Ok(item)
    }

    pub async fn get_item(&self, item_id: Id) -> DomainResult<ItemDetails> {
        self.get_item_at(item_id, Utc::now()).await
    }

    /// Item view with last and next approved booking relative to `now`
    pub async fn get_item_at(&self, item_id: Id, now: DateTime<Utc>) -> DomainResult<ItemDetails> {
        let item = self.find_item(item_id).await?;
        let bookings = self.booking_repository.find_approved_by_item(item_id).await?;
        let comments = self.comment_repository.find_by_item(item_id).await?;

        Ok(ItemDetails::assemble(item, &bookings, comments, now))
    }

    pub async fn list_by_owner(&self, owner_id: Id) -> DomainResult<Vec<ItemDetails>> {
        self.list_by_owner_at(owner_id, Utc::now()).await
    }

    /// Views of every item of `owner_id`, in id order
    ///
    /// Bookings and comments are each fetched once for the owner and grouped
    /// by item.
    pub async fn list_by_owner_at(&self, owner_id: Id, now: DateTime<Utc>) -> DomainResult<Vec<ItemDetails>> {
        let items = self.item_repository.find_by_owner(owner_id).await?;
        if items.is_empty() {
            return Ok(Vec::new());
        }
        debug!(owner_id, count = items.len(), "Assembling owner items");

        let mut bookings: HashMap<Id, Vec<Booking>> = HashMap::new();
        for booking in self.booking_repository.find_approved_by_owner(owner_id).await? {
            bookings.entry(booking.item_id).or_default().push(booking);
        }

        let mut comments: HashMap<Id, Vec<CommentView>> = HashMap::new();
        for comment in self.comment_repository.find_by_owner(owner_id).await? {
            comments.entry(comment.item_id).or_default().push(comment);
        }

        Ok(items
            .into_iter()
            .map(|item| {
                let item_bookings = bookings.remove(&item.id).unwrap_or_default();
                let item_comments = comments.remove(&item.id).unwrap_or_default();
                ItemDetails::assemble(item, &item_bookings, item_comments, now)
            })
            .collect())
    }

    /// Available items matching `text` in name or description, ignoring case
    ///
    /// Blank text matches nothing.
    pub async fn search(&self, text: &str) -> DomainResult<Vec<Item>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.item_repository.search_available(&text.to_lowercase()).await
    }

    async fn find_item(&self, item_id: Id) -> DomainResult<Item> {
        self.item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", item_id))
    }
}
