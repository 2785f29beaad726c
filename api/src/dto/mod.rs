//! Request and response bodies. JSON field names are camelCase.

pub mod booking;
pub mod comment;
pub mod item;
pub mod time;
pub mod user;

pub use booking::{BookingDto, CreateBookingRequest};
pub use comment::{CommentDto, CreateCommentRequest};
pub use item::{BookingShortDto, CreateItemRequest, ItemDto, ItemInfoDto, UpdateItemRequest};
pub use user::{CreateUserRequest, UpdateUserRequest, UserDto};

use validator::ValidationError;

/// Rejects empty and whitespace-only strings
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}
