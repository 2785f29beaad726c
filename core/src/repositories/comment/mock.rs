//! In-memory implementation of CommentRepository

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{Comment, Id, Item};
use crate::domain::value_objects::CommentView;
use crate::errors::DomainError;
use crate::repositories::memory::MemoryStore;

use super::trait_::CommentRepository;

/// Mock comment repository over a shared [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MockCommentRepository {
    store: Arc<MemoryStore>,
}

impl MockCommentRepository {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    async fn views_where<F>(&self, keep: F) -> Vec<CommentView>
    where
        F: Fn(&Comment, &Item) -> bool + Send,
    {
        let users = self.store.users.read().await;
        let items = self.store.items.read().await;
        let comments = self.store.comments.read().await;

        let mut found: Vec<(&Comment, CommentView)> = comments
            .values()
            .filter_map(|comment| {
                let item = items.get(&comment.item_id)?;
                if !keep(comment, item) {
                    return None;
                }
                let author = users.get(&comment.author_id)?;
                Some((
                    comment,
                    CommentView {
                        id: comment.id,
                        text: comment.text.clone(),
                        item_id: comment.item_id,
                        author_name: author.name.clone(),
                        created: comment.created,
                    },
                ))
            })
            .collect();

        found.sort_by(|(a, _), (b, _)| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        found.into_iter().map(|(_, view)| view).collect()
    }
}

impl Default for MockCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn create(&self, mut comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.store.comments.write().await;
        comment.id = self.store.next_comment_id();
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_item(&self, item_id: Id) -> Result<Vec<CommentView>, DomainError> {
        Ok(self.views_where(|comment, _| comment.item_id == item_id).await)
    }

    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<CommentView>, DomainError> {
        Ok(self.views_where(|_, item| item.is_owned_by(owner_id)).await)
    }
}
