//! Route handlers grouped by resource
//!
//! - `users` - user directory
//! - `items` - item catalog and comments
//! - `bookings` - booking workflow

pub mod bookings;
pub mod items;
pub mod users;

use serde::Deserialize;

use si_core::domain::value_objects::BookingState;

use crate::handlers::ApiResult;

/// `?state=` query of the booking lists; absent means `ALL`
#[derive(Debug, Default, Deserialize)]
pub struct StateQuery {
    pub state: Option<String>,
}

impl StateQuery {
    pub fn booking_state(&self) -> ApiResult<BookingState> {
        match self.state.as_deref() {
            None => Ok(BookingState::default()),
            Some(raw) => Ok(raw.parse::<BookingState>()?),
        }
    }
}
