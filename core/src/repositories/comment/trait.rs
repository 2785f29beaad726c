//! Comment repository trait.

use async_trait::async_trait;

use crate::domain::entities::{Comment, Id};
use crate::domain::value_objects::CommentView;
use crate::errors::DomainError;

/// Repository trait for Comment persistence
///
/// Read queries return [`CommentView`] rows with the author's name joined in,
/// ordered by creation time.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return it with its assigned id
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;

    async fn find_by_item(&self, item_id: Id) -> Result<Vec<CommentView>, DomainError>;

    /// Comments on every item owned by `owner_id`
    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<CommentView>, DomainError>;
}
