//! Application layer - use cases orchestrating domain logic over the
//! repository boundary

pub mod services;

pub use services::{BookingService, CatalogService};
