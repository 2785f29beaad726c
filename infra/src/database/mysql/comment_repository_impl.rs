//! MySQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use si_core::domain::entities::{Comment, Id};
use si_core::domain::value_objects::CommentView;
use si_core::errors::DomainError;
use si_core::repositories::CommentRepository;

use super::{column, inserted_id, query_failed};

const VIEW_SELECT: &str = r#"
    SELECT c.id, c.text, c.item_id, u.name AS author_name, c.created
    FROM comments c
    JOIN users u ON u.id = c.author_id
"#;

/// MySQL implementation of CommentRepository
pub struct MySqlCommentRepository {
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_view(row: &MySqlRow) -> Result<CommentView, DomainError> {
        Ok(CommentView {
            id: column(row, "id")?,
            text: column(row, "text")?,
            item_id: column(row, "item_id")?,
            author_name: column(row, "author_name")?,
            created: column(row, "created")?,
        })
    }
}

#[async_trait]
impl CommentRepository for MySqlCommentRepository {
    async fn create(&self, mut comment: Comment) -> Result<Comment, DomainError> {
        let result = sqlx::query("INSERT INTO comments (text, item_id, author_id, created) VALUES (?, ?, ?, ?)")
            .bind(&comment.text)
            .bind(comment.item_id)
            .bind(comment.author_id)
            .bind(comment.created)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        comment.id = inserted_id(result.last_insert_id())?;
        Ok(comment)
    }

    async fn find_by_item(&self, item_id: Id) -> Result<Vec<CommentView>, DomainError> {
        let query = format!("{} WHERE c.item_id = ? ORDER BY c.created, c.id", VIEW_SELECT);
        let rows = sqlx::query(&query)
            .bind(item_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_view).collect()
    }

    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<CommentView>, DomainError> {
        let query = format!(
            "{} JOIN items i ON i.id = c.item_id WHERE i.owner_id = ? ORDER BY c.created, c.id",
            VIEW_SELECT
        );
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_view).collect()
    }
}
