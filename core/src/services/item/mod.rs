//! Item catalog: listing, editing, search and the aggregated item view.

mod service;

pub use service::ItemService;
