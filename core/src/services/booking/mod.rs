//! Booking workflow: requests, owner decisions and state-filtered listings.

mod service;

pub use service::BookingService;
