//! Booking repository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Booking, BookingStatus, Id};
use crate::domain::value_objects::{BookingDetails, BookingState};
use crate::errors::DomainError;

/// Repository trait for Booking persistence
///
/// Detail queries resolve the item and the booker together with the booking,
/// so callers never need follow-up lookups to check ownership.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return it with its assigned id
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Moves a waiting booking to `status` in one conditional write
    ///
    /// Returns `false` when the booking is no longer waiting.
    async fn decide(&self, id: Id, status: BookingStatus) -> Result<bool, DomainError>;

    /// Booking with item and booker resolved
    async fn find_details_by_id(&self, id: Id) -> Result<Option<BookingDetails>, DomainError>;

    /// Bookings made by `booker_id` matching `state` at `now`, newest start first
    async fn find_by_booker(
        &self,
        booker_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError>;

    /// Bookings of items owned by `owner_id` matching `state` at `now`,
    /// newest start first
    async fn find_by_owner(
        &self,
        owner_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError>;

    /// Approved bookings across every item of `owner_id`
    async fn find_approved_by_owner(&self, owner_id: Id) -> Result<Vec<Booking>, DomainError>;

    /// Approved bookings of one item
    async fn find_approved_by_item(&self, item_id: Id) -> Result<Vec<Booking>, DomainError>;

    /// Whether `booker_id` has a booking of `item_id` that ended by `now`
    async fn exists_completed(
        &self,
        booker_id: Id,
        item_id: Id,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
