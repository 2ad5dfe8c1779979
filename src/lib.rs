//! # Uley Rental Service
//!
//! Rental marketplace backend: catalog browsing plus day-granular item
//! booking with conflict detection and booked-day summaries.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Entities, calendar-day periods, booking rules and
//!   repository traits
//! - **application**: BookingService and CatalogService use cases
//! - **infrastructure**: SeaORM persistence, migrations, in-memory store
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig, InMemoryStore};

// Re-export API router
pub use interfaces::http::create_api_router;
