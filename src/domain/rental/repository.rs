//! Rental repository interface

use async_trait::async_trait;

use super::model::Rental;
use crate::domain::DomainResult;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Persist a new rental and return it as stored.
    async fn save(&self, rental: Rental) -> DomainResult<Rental>;

    /// All rentals for an item, newest start date first.
    async fn find_by_item(&self, item_id: &str) -> DomainResult<Vec<Rental>>;
}
