//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_items;
mod m20250801_000002_create_rentals;
mod m20250801_000003_seed_demo_catalog;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_items::Migration),
            Box::new(m20250801_000002_create_rentals::Migration),
            Box::new(m20250801_000003_seed_demo_catalog::Migration),
        ]
    }
}
