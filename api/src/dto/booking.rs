use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use si_core::domain::entities::{BookingStatus, Id};
use si_core::domain::value_objects::BookingDetails;

use super::item::ItemDto;
use super::time::deserialize_utc;
use super::user::UserDto;

/// Booking request; all fields are required by deserialization
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item_id: Id,
    #[serde(deserialize_with = "deserialize_utc")]
    pub start: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_utc")]
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Id,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub item: ItemDto,
    pub booker: UserDto,
}

impl From<BookingDetails> for BookingDto {
    fn from(details: BookingDetails) -> Self {
        Self {
            id: details.booking.id,
            start: details.booking.start,
            end: details.booking.end,
            status: details.booking.status,
            item: details.item.into(),
            booker: details.booker.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_naive_timestamps() {
        let request: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "itemId": 3,
            "start": "2030-01-01T10:00:00",
            "end": "2030-01-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(request.item_id, 3);
        assert!(request.start < request.end);
    }

    #[test]
    fn test_request_requires_all_fields() {
        let missing = serde_json::from_value::<CreateBookingRequest>(serde_json::json!({
            "itemId": 3,
            "start": "2030-01-01T10:00:00Z"
        }));
        assert!(missing.is_err());
    }
}
