//! Comment log: reviews left by past renters.

mod service;

pub use service::CommentService;

#[cfg(test)]
mod tests;
