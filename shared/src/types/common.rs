//! Common type definitions

/// Storage-assigned numeric identifier used by every entity
pub type Id = i64;
