//! Create rentals table
//!
//! One row per rental; date_start/date_end are inclusive calendar days.
//! The non-overlap invariant is enforced by the booking service, not by a
//! database constraint, so the table only carries lookup indexes.

use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_items::Items;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rentals::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rentals::ItemId).string().not_null())
                    .col(ColumnDef::new(Rentals::RenterId).string().not_null())
                    .col(ColumnDef::new(Rentals::DateStart).date().not_null())
                    .col(ColumnDef::new(Rentals::DateEnd).date().not_null())
                    .col(
                        ColumnDef::new(Rentals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rentals_item")
                            .from(Rentals::Table, Rentals::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_item")
                    .table(Rentals::Table)
                    .col(Rentals::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rentals_date_start")
                    .table(Rentals::Table)
                    .col(Rentals::DateStart)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rentals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rentals {
    Table,
    Id,
    ItemId,
    RenterId,
    DateStart,
    DateEnd,
    CreatedAt,
}
