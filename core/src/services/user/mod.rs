//! User directory: registration, profile updates and lookups.

mod service;

pub use service::UserService;

#[cfg(test)]
mod tests;
