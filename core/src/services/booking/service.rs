//! Booking workflow service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::domain::entities::{Booking, Id};
use crate::domain::value_objects::{BookingDetails, BookingState};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, ItemRepository, UserRepository};

/// Service driving bookings from request to owner decision
///
/// Bookings start as WAITING and are approved or rejected exactly once by the
/// item owner. Overlapping bookings of the same item are not detected.
pub struct BookingService<U, I, B>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
{
    user_repository: Arc<U>,
    item_repository: Arc<I>,
    booking_repository: Arc<B>,
}

impl<U, I, B> BookingService<U, I, B>
where
    U: UserRepository,
    I: ItemRepository,
    B: BookingRepository,
{
    pub fn new(user_repository: Arc<U>, item_repository: Arc<I>, booking_repository: Arc<B>) -> Self {
        Self {
            user_repository,
            item_repository,
            booking_repository,
        }
    }

    /// Request a booking of `item_id` for `[start, end)`
    ///
    /// Checks run in order: booker exists, item exists, booker is not the
    /// owner, item is available, `start < end`.
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - Booker or item does not exist
    /// * `DomainError::Validation` - Own item, unavailable item or empty window
    pub async fn create_booking(
        &self,
        booker_id: Id,
        item_id: Id,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<BookingDetails> {
        let booker = self
            .user_repository
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", booker_id))?;

        let item = self
            .item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Item", item_id))?;

        if item.is_owned_by(booker_id) {
            warn!(item_id, booker_id, "Rejected booking of own item");
            return Err(DomainError::validation("Owner cannot book their own item"));
        }
        if !item.available {
            warn!(item_id, booker_id, "Rejected booking of unavailable item");
            return Err(DomainError::validation("Item is not available for booking"));
        }

        let booking = Booking::new(item_id, booker_id, start, end)?;
        let booking = self.booking_repository.create(booking).await?;
        info!(booking_id = booking.id, item_id, booker_id, %start, %end, "Booking created");

        Ok(BookingDetails { booking, item, booker })
    }

    /// Approve or reject a waiting booking
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such booking
    /// * `DomainError::AccessDenied` - Requester does not own the item
    /// * `DomainError::Validation` - Status was already decided
    pub async fn update_status(&self, booking_id: Id, approved: bool, requester_id: Id) -> DomainResult<BookingDetails> {
        let mut details = self.find_details(booking_id).await?;

        if details.owner_id() != requester_id {
            warn!(booking_id, requester_id, "Rejected status change by non-owner");
            return Err(DomainError::access_denied("Only the item owner can approve a booking"));
        }

        details.booking.decide(approved)?;
        if !self.booking_repository.decide(booking_id, details.booking.status).await? {
            warn!(booking_id, requester_id, "Booking decided by a concurrent request");
            return Err(DomainError::validation("Booking status already decided"));
        }
        info!(booking_id, status = %details.booking.status, "Booking decided");

        Ok(details)
    }

    /// Booking as seen by its booker or the item owner
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such booking
    /// * `DomainError::AccessDenied` - Requester is neither booker nor owner
    pub async fn get_booking(&self, booking_id: Id, requester_id: Id) -> DomainResult<BookingDetails> {
        let details = self.find_details(booking_id).await?;

        if !details.is_visible_to(requester_id) {
            return Err(DomainError::access_denied("Booking is visible only to its booker and the item owner"));
        }
        Ok(details)
    }

    pub async fn list_by_booker(&self, booker_id: Id, state: BookingState) -> DomainResult<Vec<BookingDetails>> {
        self.list_by_booker_at(booker_id, state, Utc::now()).await
    }

    /// Bookings made by `booker_id` in `state` at `now`, newest start first
    pub async fn list_by_booker_at(
        &self,
        booker_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<BookingDetails>> {
        self.ensure_user(booker_id).await?;
        debug!(booker_id, %state, "Listing bookings by booker");
        self.booking_repository.find_by_booker(booker_id, state, now).await
    }

    pub async fn list_by_owner(&self, owner_id: Id, state: BookingState) -> DomainResult<Vec<BookingDetails>> {
        self.list_by_owner_at(owner_id, state, Utc::now()).await
    }

    /// Bookings of the items of `owner_id` in `state` at `now`, newest start first
    pub async fn list_by_owner_at(
        &self,
        owner_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<BookingDetails>> {
        self.ensure_user(owner_id).await?;
        debug!(owner_id, %state, "Listing bookings by owner");
        self.booking_repository.find_by_owner(owner_id, state, now).await
    }

    async fn find_details(&self, booking_id: Id) -> DomainResult<BookingDetails> {
        self.booking_repository
            .find_details_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", booking_id))
    }

    async fn ensure_user(&self, user_id: Id) -> DomainResult<()> {
        if self.user_repository.exists_by_id(user_id).await? {
            Ok(())
        } else {
            Err(DomainError::not_found("User", user_id))
        }
    }
}
