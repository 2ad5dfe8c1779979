//! Item aggregate
//!
//! The catalog entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::Item;
pub use repository::{ItemQuery, ItemRepository, ItemSort};
