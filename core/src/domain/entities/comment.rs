//! Comment left by a past renter on an item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, UNSAVED_ID};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Id,
    pub text: String,
    pub item_id: Id,
    pub author_id: Id,
    /// Assigned when the comment is written, never supplied by the caller
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Creates an unsaved comment stamped with the current time
    pub fn new(item_id: Id, author_id: Id, text: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            text: text.into(),
            item_id,
            author_id,
            created: Utc::now(),
        }
    }
}
