//! Shared in-memory tables backing the mock repositories.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entities::{Booking, Comment, Id, Item, User};

use super::{MockBookingRepository, MockCommentRepository, MockItemRepository, MockUserRepository};

/// In-memory tables with auto-incrementing id sequences.
///
/// Locks are always acquired in table order: users, items, bookings, comments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) users: RwLock<HashMap<Id, User>>,
    pub(crate) items: RwLock<HashMap<Id, Item>>,
    pub(crate) bookings: RwLock<HashMap<Id, Booking>>,
    pub(crate) comments: RwLock<HashMap<Id, Comment>>,
    user_seq: AtomicI64,
    item_seq: AtomicI64,
    booking_seq: AtomicI64,
    comment_seq: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next_user_id(&self) -> Id {
        next(&self.user_seq)
    }

    pub(crate) fn next_item_id(&self) -> Id {
        next(&self.item_seq)
    }

    pub(crate) fn next_booking_id(&self) -> Id {
        next(&self.booking_seq)
    }

    pub(crate) fn next_comment_id(&self) -> Id {
        next(&self.comment_seq)
    }
}

fn next(seq: &AtomicI64) -> Id {
    seq.fetch_add(1, Ordering::SeqCst) + 1
}

/// The four mock repositories wired to one store
#[derive(Clone)]
pub struct MemoryRepositories {
    pub users: Arc<MockUserRepository>,
    pub items: Arc<MockItemRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub comments: Arc<MockCommentRepository>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self {
            users: Arc::new(MockUserRepository::with_store(store.clone())),
            items: Arc::new(MockItemRepository::with_store(store.clone())),
            bookings: Arc::new(MockBookingRepository::with_store(store.clone())),
            comments: Arc::new(MockCommentRepository::with_store(store)),
        }
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
