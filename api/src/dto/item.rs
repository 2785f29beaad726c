use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use si_core::domain::entities::{Id, Item, ItemPatch};
use si_core::domain::value_objects::{BookingShort, ItemDetails};

use super::comment::CommentDto;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[validate(required(message = "name is required"), custom = "crate::dto::not_blank")]
    pub name: Option<String>,

    #[validate(required(message = "description is required"), custom = "crate::dto::not_blank")]
    pub description: Option<String>,

    #[validate(required(message = "available is required"))]
    pub available: Option<bool>,

    pub request_id: Option<Id>,
}

impl CreateItemRequest {
    /// Builds the unsaved item; call after validation
    pub fn into_item(self, owner_id: Id) -> Item {
        Item::new(
            owner_id,
            self.name.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.available.unwrap_or_default(),
        )
        .with_request(self.request_id)
    }
}

/// Partial update; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(request: UpdateItemRequest) -> Self {
        ItemPatch {
            name: request.name,
            description: request.description,
            available: request.available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: Id,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_id: Option<Id>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingShortDto {
    pub id: Id,
    pub booker_id: Id,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<BookingShort> for BookingShortDto {
    fn from(booking: BookingShort) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
        }
    }
}

/// Item with its booking slots and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInfoDto {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: Id,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_id: Option<Id>,
    pub last_booking: Option<BookingShortDto>,
    pub next_booking: Option<BookingShortDto>,
    pub comments: Vec<CommentDto>,
}

impl From<ItemDetails> for ItemInfoDto {
    fn from(details: ItemDetails) -> Self {
        let item = details.item;
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
            last_booking: details.last_booking.map(Into::into),
            next_booking: details.next_booking.map(Into::into),
            comments: details.comments.into_iter().map(Into::into).collect(),
        }
    }
}
