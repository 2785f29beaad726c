//! Fixtures shared by the service tests.

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{Booking, Id, Item, User};
use crate::repositories::{
    BookingRepository, ItemRepository, MemoryRepositories, MockBookingRepository, MockCommentRepository,
    MockItemRepository, MockUserRepository, UserRepository,
};
use crate::services::{BookingService, CommentService, ItemService, UserService};

pub type TestItemService =
    ItemService<MockUserRepository, MockItemRepository, MockBookingRepository, MockCommentRepository>;
pub type TestCommentService =
    CommentService<MockUserRepository, MockItemRepository, MockBookingRepository, MockCommentRepository>;
pub type TestBookingService = BookingService<MockUserRepository, MockItemRepository, MockBookingRepository>;

/// Alice owns a drill; Bob is a second registered user
pub struct World {
    pub repos: MemoryRepositories,
    pub alice: User,
    pub bob: User,
    pub drill: Item,
}

impl World {
    pub async fn new() -> Self {
        let repos = MemoryRepositories::new();
        let alice = repos.users.create(User::new("Alice", "a@x.com")).await.unwrap();
        let bob = repos.users.create(User::new("Bob", "b@x.com")).await.unwrap();
        let drill = repos
            .items
            .create(Item::new(alice.id, "Drill", "Cordless drill", true))
            .await
            .unwrap();

        Self { repos, alice, bob, drill }
    }

    pub fn users(&self) -> UserService<MockUserRepository> {
        UserService::new(self.repos.users.clone())
    }

    pub fn items(&self) -> TestItemService {
        ItemService::new(
            self.repos.users.clone(),
            self.repos.items.clone(),
            self.repos.bookings.clone(),
            self.repos.comments.clone(),
        )
    }

    pub fn comments(&self) -> TestCommentService {
        CommentService::new(
            self.repos.users.clone(),
            self.repos.items.clone(),
            self.repos.bookings.clone(),
            self.repos.comments.clone(),
        )
    }

    pub fn bookings(&self) -> TestBookingService {
        BookingService::new(
            self.repos.users.clone(),
            self.repos.items.clone(),
            self.repos.bookings.clone(),
        )
    }

    /// Stores a booking directly, bypassing the workflow rules
    pub async fn insert_booking(
        &self,
        item_id: Id,
        booker_id: Id,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        approved: Option<bool>,
    ) -> Booking {
        let mut booking = Booking::new(item_id, booker_id, start, end).unwrap();
        if let Some(approved) = approved {
            booking.decide(approved).unwrap();
        }
        self.repos.bookings.create(booking).await.unwrap()
    }
}

pub fn hours(now: DateTime<Utc>, h: i64) -> DateTime<Utc> {
    now + Duration::hours(h)
}
