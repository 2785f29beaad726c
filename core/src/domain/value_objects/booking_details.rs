//! Booking with its item and booker resolved.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booking, Id, Item, User};

/// Booking loaded together with its item and booker in one query.
/// The item carries the owner id, so both participants are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub booking: Booking,
    pub item: Item,
    pub booker: User,
}

impl BookingDetails {
    pub fn owner_id(&self) -> Id {
        self.item.owner_id
    }

    /// Only the booker and the item owner may see a booking
    pub fn is_visible_to(&self, user_id: Id) -> bool {
        self.booking.booker_id == user_id || self.item.owner_id == user_id
    }
}
