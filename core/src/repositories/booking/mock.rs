//! In-memory implementation of BookingRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::entities::{Booking, BookingStatus, Id};
use crate::domain::value_objects::{BookingDetails, BookingState};
use crate::errors::DomainError;
use crate::repositories::memory::MemoryStore;

use super::trait_::BookingRepository;

/// Mock booking repository over a shared [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MockBookingRepository {
    store: Arc<MemoryStore>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Joins every booking accepted by `keep` with its item and booker,
    /// newest start first
    async fn details_where<F>(&self, keep: F) -> Vec<BookingDetails>
    where
        F: Fn(&BookingDetails) -> bool + Send,
    {
        let users = self.store.users.read().await;
        let items = self.store.items.read().await;
        let bookings = self.store.bookings.read().await;

        let mut found: Vec<BookingDetails> = bookings
            .values()
            .filter_map(|booking| {
                let item = items.get(&booking.item_id)?;
                let booker = users.get(&booking.booker_id)?;
                Some(BookingDetails {
                    booking: booking.clone(),
                    item: item.clone(),
                    booker: booker.clone(),
                })
            })
            .filter(|details| keep(details))
            .collect();

        found.sort_by(|a, b| {
            b.booking
                .start
                .cmp(&a.booking.start)
                .then_with(|| b.booking.id.cmp(&a.booking.id))
        });
        found
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.store.bookings.write().await;
        booking.id = self.store.next_booking_id();
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn decide(&self, id: Id, status: BookingStatus) -> Result<bool, DomainError> {
        let mut bookings = self.store.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Booking", id))?;

        if booking.status != BookingStatus::Waiting {
            return Ok(false);
        }

        booking.status = status;
        Ok(true)
    }

    async fn find_details_by_id(&self, id: Id) -> Result<Option<BookingDetails>, DomainError> {
        Ok(self
            .details_where(|d| d.booking.id == id)
            .await
            .into_iter()
            .next())
    }

    async fn find_by_booker(
        &self,
        booker_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        Ok(self
            .details_where(|d| d.booking.booker_id == booker_id && state.matches(&d.booking, now))
            .await)
    }

    async fn find_by_owner(
        &self,
        owner_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        Ok(self
            .details_where(|d| d.owner_id() == owner_id && state.matches(&d.booking, now))
            .await)
    }

    async fn find_approved_by_owner(&self, owner_id: Id) -> Result<Vec<Booking>, DomainError> {
        Ok(self
            .details_where(|d| d.owner_id() == owner_id && d.booking.status == BookingStatus::Approved)
            .await
            .into_iter()
            .map(|d| d.booking)
            .collect())
    }

    async fn find_approved_by_item(&self, item_id: Id) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.store.bookings.read().await;
        Ok(bookings
            .values()
            .filter(|b| b.item_id == item_id && b.status == BookingStatus::Approved)
            .cloned()
            .collect())
    }

    async fn exists_completed(
        &self,
        booker_id: Id,
        item_id: Id,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let bookings = self.store.bookings.read().await;
        Ok(bookings
            .values()
            .any(|b| b.booker_id == booker_id && b.item_id == item_id && b.is_past_at(now)))
    }
}
