//! State filter for booking list queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booking, BookingStatus};
use crate::errors::DomainError;

/// Classifies bookings relative to "now" or by status.
///
/// There is no `Approved` value: approved bookings are only
/// listed through [`BookingState::All`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    /// No filter
    #[default]
    All,
    /// `start <= now < end`
    Current,
    /// `end <= now`
    Past,
    /// `start > now`
    Future,
    /// status is waiting
    Waiting,
    /// status is rejected
    Rejected,
}

impl BookingState {
    pub const ALL_VALUES: [BookingState; 6] = [
        BookingState::All,
        BookingState::Current,
        BookingState::Past,
        BookingState::Future,
        BookingState::Waiting,
        BookingState::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingState::All => "ALL",
            BookingState::Current => "CURRENT",
            BookingState::Past => "PAST",
            BookingState::Future => "FUTURE",
            BookingState::Waiting => "WAITING",
            BookingState::Rejected => "REJECTED",
        }
    }

    /// Whether `booking` belongs to this filter at instant `now`
    pub fn matches(&self, booking: &Booking, now: DateTime<Utc>) -> bool {
        match self {
            BookingState::All => true,
            BookingState::Current => booking.is_current_at(now),
            BookingState::Past => booking.is_past_at(now),
            BookingState::Future => booking.is_future_at(now),
            BookingState::Waiting => booking.status == BookingStatus::Waiting,
            BookingState::Rejected => booking.status == BookingStatus::Rejected,
        }
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingState {
    type Err = DomainError;

    /// Case-insensitive; unknown values are a validation error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL_VALUES
            .into_iter()
            .find(|state| state.as_str() == upper)
            .ok_or_else(|| DomainError::validation(format!("Unknown state: {}", s)))
    }
}
