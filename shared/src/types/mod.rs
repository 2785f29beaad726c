//! Type definitions shared by every layer
//!
//! - `common` - identifier type
//! - `response` - error body and health check payload

pub mod common;
pub mod response;

pub use common::Id;
pub use response::{error_codes, ErrorResponse, HealthResponse};
