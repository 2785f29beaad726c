//! Item entity: something a user lists for others to borrow.

use serde::{Deserialize, Serialize};

use super::{Id, UNSAVED_ID};

/// Item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Storage-assigned identifier
    pub id: Id,

    pub name: String,

    pub description: String,

    /// Whether new bookings are accepted
    pub available: bool,

    /// User who listed the item
    pub owner_id: Id,

    /// Request this item was listed in answer to, if any
    pub request_id: Option<Id>,
}

/// Partial update of an item; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl ItemPatch {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.available.is_none()
    }
}

impl Item {
    /// Creates an unsaved item owned by `owner_id`
    pub fn new(
        owner_id: Id,
        name: impl Into<String>,
        description: impl Into<String>,
        available: bool,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            available,
            owner_id,
            request_id: None,
        }
    }

    /// Links the item to the request it answers
    pub fn with_request(mut self, request_id: Option<Id>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn is_owned_by(&self, user_id: Id) -> bool {
        self.owner_id == user_id
    }

    /// Applies only the fields present in `patch`
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }

    /// Case-insensitive substring match over name or description.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drill() -> Item {
        Item::new(1, "Drill", "Cordless drill with two batteries", true)
    }

    #[test]
    fn test_partial_update_keeps_omitted_fields() {
        let mut item = drill();
        item.apply(ItemPatch {
            available: Some(false),
            ..Default::default()
        });

        assert!(!item.available);
        assert_eq!(item.name, "Drill");
        assert_eq!(item.description, "Cordless drill with two batteries");
    }

    #[test]
    fn test_full_update() {
        let mut item = drill();
        item.apply(ItemPatch {
            name: Some("Hammer drill".to_string()),
            description: Some("Heavy".to_string()),
            available: Some(false),
        });

        assert_eq!(item.name, "Hammer drill");
        assert_eq!(item.description, "Heavy");
        assert!(!item.available);
    }

    #[test]
    fn test_matches_text() {
        let item = drill();
        assert!(item.matches_text("drill"));
        assert!(item.matches_text("batter"));
        assert!(!item.matches_text("saw"));
    }

    #[test]
    fn test_ownership_and_request() {
        let item = drill().with_request(Some(7));
        assert!(item.is_owned_by(1));
        assert!(!item.is_owned_by(2));
        assert_eq!(item.request_id, Some(7));
        assert!(ItemPatch::default().is_empty());
    }
}
