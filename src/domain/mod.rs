pub mod error;
pub mod item;
pub mod period;
pub mod rental;
pub mod repositories;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use item::{Item, ItemQuery, ItemRepository, ItemSort};
pub use period::DatePeriod;
pub use rental::{booked_day_ranges, check_conflicts, DayRange, Rental, RentalRepository};
pub use repositories::RepositoryProvider;
