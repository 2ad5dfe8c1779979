//! Rental aggregate
//!
//! The Rental entity, its repository interface, and the two pure pieces of
//! booking logic: conflict detection and booked-day schedule compaction.

pub mod conflict;
pub mod model;
pub mod repository;
pub mod schedule;

pub use conflict::{check_conflicts, find_conflict};
pub use model::Rental;
pub use repository::RentalRepository;
pub use schedule::{booked_day_ranges, DayRange};
