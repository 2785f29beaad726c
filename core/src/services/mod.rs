//! Business services containing domain logic and use cases.

pub mod booking;
pub mod comment;
pub mod item;
pub mod user;

// Re-export commonly used types
pub use booking::BookingService;
pub use comment::CommentService;
pub use item::ItemService;
pub use user::UserService;

#[cfg(test)]
pub(crate) mod test_support;
