//! Comment log service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::entities::{Comment, Id};
use crate::domain::value_objects::CommentView;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, CommentRepository, ItemRepository, UserRepository};

/// Service recording comments on items
pub struct CommentService<U, I, B, C>
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

impl<U, I, B, C> CommentService<U, I, B, C>
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

    pub async fn add_comment(&self, item_id: Id, author_id: Id, text: &str) -> DomainResult<CommentView> {
        self.add_comment_at(item_id, author_id, text, Utc::now()).await
    }

    /// Record a comment written at `now`
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - Author or item does not exist
    /// * `DomainError::Validation` - Author has no booking of the item that
    ///   ended by `now`
    pub async fn add_comment_at(
        &self,
        item_id: Id,
        author_id: Id,
        text: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<CommentView> {
        let author = self
            .user_repository
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", author_id))?;

        if self.item_repository.find_by_id(item_id).await?.is_none() {
            return Err(DomainError::not_found("Item", item_id));
        }

        if !self
            .booking_repository
            .exists_completed(author_id, item_id, now)
            .await?
        {
            warn!(item_id, author_id, "Rejected comment without a finished rental");
            return Err(DomainError::validation(
                "User has not rented this item, or the rental is not yet finished",
            ));
        }

        let mut comment = Comment::new(item_id, author_id, text);
        comment.created = now;
        let comment = self.comment_repository.create(comment).await?;
        info!(comment_id = comment.id, item_id, author_id, "Comment added");

        Ok(CommentView {
            id: comment.id,
            text: comment.text,
            item_id: comment.item_id,
            author_name: author.name,
            created: comment.created,
        })
    }

    /// Comments of one item in creation order
    pub async fn list_by_item(&self, item_id: Id) -> DomainResult<Vec<CommentView>> {
        self.comment_repository.find_by_item(item_id).await
    }

    /// Comments on every item of `owner_id` in creation order
    pub async fn list_by_owner(&self, owner_id: Id) -> DomainResult<Vec<CommentView>> {
        self.comment_repository.find_by_owner(owner_id).await
    }
}
