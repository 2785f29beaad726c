//! MySQL implementation of the BookingRepository trait.
//!
//! Detail reads join `items` and `users` so a booking comes back with its
//! item (and therefore the owner id) and its booker in one statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use si_core::domain::entities::{Booking, BookingStatus, Id, Item, User};
use si_core::domain::value_objects::{BookingDetails, BookingState};
use si_core::errors::DomainError;
use si_core::repositories::BookingRepository;

use super::{column, inserted_id, query_failed};

const DETAILS_SELECT: &str = r#"
    SELECT b.id, b.start_date, b.end_date, b.item_id, b.booker_id, b.status,
           i.name AS item_name, i.description AS item_description,
           i.available AS item_available, i.owner_id AS item_owner_id,
           i.request_id AS item_request_id,
           u.name AS booker_name, u.email AS booker_email
    FROM bookings b
    JOIN items i ON i.id = b.item_id
    JOIN users u ON u.id = b.booker_id
"#;

const BOOKING_SELECT: &str = r#"
    SELECT b.id, b.start_date, b.end_date, b.item_id, b.booker_id, b.status
    FROM bookings b
"#;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
        let status: String = column(row, "status")?;

        Ok(Booking {
            id: column(row, "id")?,
            start: column(row, "start_date")?,
            end: column(row, "end_date")?,
            item_id: column(row, "item_id")?,
            booker_id: column(row, "booker_id")?,
            status: status.parse()?,
        })
    }

    fn row_to_details(row: &MySqlRow) -> Result<BookingDetails, DomainError> {
        let booking = Self::row_to_booking(row)?;

        let item = Item {
            id: booking.item_id,
            name: column(row, "item_name")?,
            description: column(row, "item_description")?,
            available: column(row, "item_available")?,
            owner_id: column(row, "item_owner_id")?,
            request_id: column(row, "item_request_id")?,
        };
        let booker = User {
            id: booking.booker_id,
            name: column(row, "booker_name")?,
            email: column(row, "booker_email")?,
        };

        Ok(BookingDetails { booking, item, booker })
    }

    /// Appends the predicate selecting `state` at `now`
    fn push_state_filter(query: &mut QueryBuilder<'_, MySql>, state: BookingState, now: DateTime<Utc>) {
        match state {
            BookingState::All => {}
            BookingState::Current => {
                query
                    .push(" AND b.start_date <= ")
                    .push_bind(now)
                    .push(" AND b.end_date > ")
                    .push_bind(now);
            }
            BookingState::Past => {
                query.push(" AND b.end_date <= ").push_bind(now);
            }
            BookingState::Future => {
                query.push(" AND b.start_date > ").push_bind(now);
            }
            BookingState::Waiting => {
                query.push(" AND b.status = ").push_bind(BookingStatus::Waiting.as_str());
            }
            BookingState::Rejected => {
                query.push(" AND b.status = ").push_bind(BookingStatus::Rejected.as_str());
            }
        }
    }

    async fn fetch_details(&self, mut query: QueryBuilder<'_, MySql>) -> Result<Vec<BookingDetails>, DomainError> {
        query.push(" ORDER BY b.start_date DESC, b.id DESC");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_details).collect()
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let result = sqlx::query(
            "INSERT INTO bookings (start_date, end_date, item_id, booker_id, status) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(booking.start)
        .bind(booking.end)
        .bind(booking.item_id)
        .bind(booking.booker_id)
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        booking.id = inserted_id(result.last_insert_id())?;
        Ok(booking)
    }

    async fn decide(&self, id: Id, status: BookingStatus) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ? AND status = ?")
            .bind(status.as_str())
            .bind(id)
            .bind(BookingStatus::Waiting.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_details_by_id(&self, id: Id) -> Result<Option<BookingDetails>, DomainError> {
        let query = format!("{} WHERE b.id = ? LIMIT 1", DETAILS_SELECT);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_details).transpose()
    }

    async fn find_by_booker(
        &self,
        booker_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        let mut query = QueryBuilder::new(DETAILS_SELECT);
        query.push(" WHERE b.booker_id = ").push_bind(booker_id);
        Self::push_state_filter(&mut query, state, now);

        self.fetch_details(query).await
    }

    async fn find_by_owner(
        &self,
        owner_id: Id,
        state: BookingState,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingDetails>, DomainError> {
        let mut query = QueryBuilder::new(DETAILS_SELECT);
        query.push(" WHERE i.owner_id = ").push_bind(owner_id);
        Self::push_state_filter(&mut query, state, now);

        self.fetch_details(query).await
    }

    async fn find_approved_by_owner(&self, owner_id: Id) -> Result<Vec<Booking>, DomainError> {
        let query = format!(
            "{} JOIN items i ON i.id = b.item_id WHERE i.owner_id = ? AND b.status = ?",
            BOOKING_SELECT
        );
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .bind(BookingStatus::Approved.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_approved_by_item(&self, item_id: Id) -> Result<Vec<Booking>, DomainError> {
        let query = format!("{} WHERE b.item_id = ? AND b.status = ?", BOOKING_SELECT);
        let rows = sqlx::query(&query)
            .bind(item_id)
            .bind(BookingStatus::Approved.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn exists_completed(
        &self,
        booker_id: Id,
        item_id: Id,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE booker_id = ? AND item_id = ? AND end_date <= ?",
        )
        .bind(booker_id)
        .bind(item_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(count > 0)
    }
}
