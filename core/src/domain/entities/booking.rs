//! Booking entity and its status workflow.
//!
//! A booking starts in [`BookingStatus::Waiting`] and is decided exactly once
//! by the item owner, ending in `Approved` or `Rejected`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Id, UNSAVED_ID};
use crate::errors::{DomainError, DomainResult};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Awaiting the owner's decision
    Waiting,
    /// Accepted by the owner
    Approved,
    /// Declined by the owner
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Waiting => "WAITING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    /// Approved and rejected bookings never change again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Waiting)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WAITING" => Ok(BookingStatus::Waiting),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            other => Err(DomainError::internal(format!("Unknown booking status: {}", other))),
        }
    }
}

/// Booking of an item for the half-open window `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Storage-assigned identifier
    pub id: Id,

    pub start: DateTime<Utc>,

    /// Exclusive end, strictly after `start`
    pub end: DateTime<Utc>,

    pub item_id: Id,

    /// User who requested the booking
    pub booker_id: Id,

    pub status: BookingStatus,
}

impl Booking {
    /// Creates an unsaved booking in the waiting state.
    ///
    /// Fails with a validation error unless `start < end`.
    pub fn new(
        item_id: Id,
        booker_id: Id,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::validation("Start must be strictly before end"));
        }

        Ok(Self {
            id: UNSAVED_ID,
            start,
            end,
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        })
    }

    /// Moves a waiting booking to approved or rejected.
    ///
    /// A booking is decided at most once; any later call fails.
    pub fn decide(&mut self, approved: bool) -> DomainResult<()> {
        if self.status.is_terminal() {
            return Err(DomainError::validation(format!(
                "Booking status already decided: {}",
                self.status
            )));
        }

        self.status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };
        Ok(())
    }

    /// `start <= now < end`
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    /// `end <= now`
    pub fn is_past_at(&self, now: DateTime<Utc>) -> bool {
        self.end <= now
    }

    /// `start > now`
    pub fn is_future_at(&self, now: DateTime<Utc>) -> bool {
        self.start > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn booking_around(now: DateTime<Utc>, start_h: i64, end_h: i64) -> Booking {
        Booking::new(1, 2, now + Duration::hours(start_h), now + Duration::hours(end_h)).unwrap()
    }

    #[test]
    fn test_new_booking_is_waiting() {
        let now = Utc::now();
        let booking = booking_around(now, 1, 2);
        assert_eq!(booking.status, BookingStatus::Waiting);
        assert_eq!(booking.id, UNSAVED_ID);
    }

    #[test]
    fn test_inverted_or_equal_window_rejected() {
        let now = Utc::now();
        let equal = Booking::new(1, 2, now, now);
        assert!(matches!(equal, Err(DomainError::Validation { .. })));

        let inverted = Booking::new(1, 2, now + Duration::hours(2), now);
        assert!(matches!(inverted, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_decide_only_once() {
        let mut booking = booking_around(Utc::now(), 1, 2);
        booking.decide(true).unwrap();
        assert_eq!(booking.status, BookingStatus::Approved);

        assert!(matches!(booking.decide(false), Err(DomainError::Validation { .. })));
        assert!(matches!(booking.decide(true), Err(DomainError::Validation { .. })));
        assert_eq!(booking.status, BookingStatus::Approved);
    }

    #[test]
    fn test_reject() {
        let mut booking = booking_around(Utc::now(), 1, 2);
        booking.decide(false).unwrap();
        assert_eq!(booking.status, BookingStatus::Rejected);
        assert!(booking.status.is_terminal());
    }

    #[test]
    fn test_time_classification_boundaries() {
        let now = Utc::now();
        let booking = booking_around(now, 0, 1);
        // start == now counts as current, not future
        assert!(booking.is_current_at(now));
        assert!(!booking.is_future_at(now));

        // end == now counts as past, not current
        let at_end = booking.end;
        assert!(booking.is_past_at(at_end));
        assert!(!booking.is_current_at(at_end));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&BookingStatus::Waiting).unwrap(), "\"WAITING\"");
        assert_eq!("REJECTED".parse::<BookingStatus>().unwrap(), BookingStatus::Rejected);
        assert!("approved".parse::<BookingStatus>().is_err());
    }
}
