//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::item::ItemRepository;
use crate::domain::rental::RentalRepository;
use crate::domain::repositories::RepositoryProvider;

use super::item_repository::SeaOrmItemRepository;
use super::rental_repository::SeaOrmRentalRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let item = repos.items().find_by_id("itm-001").await?;
/// let rentals = repos.rentals().find_by_item("itm-001").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    items: SeaOrmItemRepository,
    rentals: SeaOrmRentalRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            items: SeaOrmItemRepository::new(db.clone()),
            rentals: SeaOrmRentalRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn items(&self) -> &dyn ItemRepository {
        &self.items
    }

    fn rentals(&self) -> &dyn RentalRepository {
        &self.rentals
    }
}
