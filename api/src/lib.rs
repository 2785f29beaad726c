//! # ShareIt API
//!
//! actix-web surface of the ShareIt backend: request DTOs and validation,
//! caller identity, error mapping and the route table.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
