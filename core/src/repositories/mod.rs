//! Storage ports and their in-memory implementations.
//!
//! Each aggregate has an async repository trait; `si_infra` provides the
//! MySQL implementations, while the `Mock*Repository` types here keep every
//! table in a shared [`MemoryStore`] so joins behave the same way.

pub mod booking;
pub mod comment;
pub mod item;
pub mod memory;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use comment::{CommentRepository, MockCommentRepository};
pub use item::{ItemRepository, MockItemRepository};
pub use memory::{MemoryRepositories, MemoryStore};
pub use user::{MockUserRepository, UserRepository};
