//! Domain entities representing core business objects.

pub mod booking;
pub mod comment;
pub mod item;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use comment::Comment;
pub use item::{Item, ItemPatch};
pub use user::{User, UserPatch};

/// Identifier type shared by all entities
pub use si_shared::Id;

/// Identifier carried by an entity that has not been persisted yet.
/// Repositories replace it with the storage-assigned value on create.
pub const UNSAVED_ID: Id = 0;
