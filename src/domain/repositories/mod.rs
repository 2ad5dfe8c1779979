//! Repository provider trait

use super::item::ItemRepository;
use super::rental::RentalRepository;

/// Provides access to all domain repositories.
///
/// Backed by SeaORM in production and by the in-memory store in tests;
/// consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let item = repos.items().find_by_id("itm-001").await?;
///     let rentals = repos.rentals().find_by_item("itm-001").await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn items(&self) -> &dyn ItemRepository;
    fn rentals(&self) -> &dyn RentalRepository;
}
