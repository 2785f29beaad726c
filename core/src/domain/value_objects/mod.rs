//! Value objects and read models assembled from several entities.

pub mod booking_details;
pub mod booking_state;
pub mod item_details;

pub use booking_details::BookingDetails;
pub use booking_state::BookingState;
pub use item_details::{BookingShort, CommentView, ItemDetails};
