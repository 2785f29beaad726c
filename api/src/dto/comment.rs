use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use si_core::domain::entities::Id;
use si_core::domain::value_objects::CommentView;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom = "crate::dto::not_blank")]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Id,
    pub text: String,
    pub item_id: Id,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

impl From<CommentView> for CommentDto {
    fn from(view: CommentView) -> Self {
        Self {
            id: view.id,
            text: view.text,
            item_id: view.item_id,
            author_name: view.author_name,
            created: view.created,
        }
    }
}
