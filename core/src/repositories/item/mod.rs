pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod mock;

pub use mock::MockItemRepository;
pub use r#trait::ItemRepository;

#[cfg(test)]
mod tests;
