//! Aggregated item view: last and next booking plus comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booking, Id, Item};

/// Short form of a booking used inside the item view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingShort {
    pub id: Id,
    pub booker_id: Id,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&Booking> for BookingShort {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
        }
    }
}

/// Comment joined with its author's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: Id,
    pub text: String,
    pub item_id: Id,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

/// Item with its booking slots and comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub item: Item,
    pub last_booking: Option<BookingShort>,
    pub next_booking: Option<BookingShort>,
    pub comments: Vec<CommentView>,
}

impl ItemDetails {
    /// Builds the view from the item's bookings as seen at `now`.
    ///
    /// Bookings belonging to other items are ignored.
    pub fn assemble(
        item: Item,
        bookings: &[Booking],
        comments: Vec<CommentView>,
        now: DateTime<Utc>,
    ) -> Self {
        let own = || bookings.iter().filter(|b| b.item_id == item.id);

        let last_booking = own()
            .filter(|b| b.end < now)
            .max_by_key(|b| b.end)
            .map(BookingShort::from);
        let next_booking = own()
            .filter(|b| b.start > now)
            .min_by_key(|b| b.start)
            .map(BookingShort::from);

        Self {
            item,
            last_booking,
            next_booking,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking(id: Id, item_id: Id, now: DateTime<Utc>, start_h: i64, end_h: i64) -> Booking {
        let mut b = Booking::new(item_id, 9, now + Duration::hours(start_h), now + Duration::hours(end_h)).unwrap();
        b.id = id;
        b
    }

    #[test]
    fn test_last_and_next_booking() {
        let now = Utc::now();
        let mut item = Item::new(1, "Drill", "Cordless", true);
        item.id = 5;

        let bookings = vec![
            booking(1, 5, now, -10, -8),
            booking(2, 5, now, -6, -4),
            booking(3, 5, now, -1, 1),
            booking(4, 5, now, 2, 3),
            booking(5, 5, now, 5, 6),
            booking(6, 99, now, -3, -2),
        ];

        let details = ItemDetails::assemble(item, &bookings, vec![], now);
        assert_eq!(details.last_booking.map(|b| b.id), Some(2));
        assert_eq!(details.next_booking.map(|b| b.id), Some(4));
    }

    #[test]
    fn test_empty_slots_are_none() {
        let now = Utc::now();
        let item = Item::new(1, "Drill", "Cordless", true);
        let details = ItemDetails::assemble(item, &[], vec![], now);

        assert!(details.last_booking.is_none());
        assert!(details.next_booking.is_none());
        assert!(details.comments.is_empty());
    }
}
