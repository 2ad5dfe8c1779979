//! Seed demo catalog
//!
//! A handful of items and one example rental so a fresh install has
//! something to browse. Inserts use fixed IDs with conflict-do-nothing,
//! so re-running the migrator is harmless.

use chrono::NaiveDate;
use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_items::Items;
use super::m20250801_000002_create_rentals::Rentals;

#[derive(DeriveMigrationName)]
pub struct Migration;

struct ItemSeed {
    id: &'static str,
    title: &'static str,
    price: f64,
    description: &'static str,
    location: &'static str,
    tags: &'static str,
    category: &'static str,
    author: &'static str,
}

const ITEM_SEEDS: &[ItemSeed] = &[
    ItemSeed {
        id: "itm-demo-drill",
        title: "Bosch GBH 2-26 rotary hammer",
        price: 8000.0,
        description: "Reliable rotary hammer for renovation work. Handles concrete and brick.",
        location: "Almaty, Bostandyk district",
        tags: "tools,renovation",
        category: "cat-tools",
        author: "usr-demo-alina",
    },
    ItemSeed {
        id: "itm-demo-tent",
        title: "NatureHike 3-person tent",
        price: 6000.0,
        description: "Light and sturdy tent for a weekend outdoors.",
        location: "Almaty, Medeu district",
        tags: "camping,outdoors",
        category: "cat-camping",
        author: "usr-demo-timur",
    },
    ItemSeed {
        id: "itm-demo-bike",
        title: "Trek Marlin 7 mountain bike",
        price: 10000.0,
        description: "Great for rides and trails. Tuned and ready to go.",
        location: "Astana, Almaty district",
        tags: "sport,bike",
        category: "cat-sport",
        author: "usr-demo-dina",
    },
    ItemSeed {
        id: "itm-demo-projector",
        title: "Xiaomi Mi Smart projector",
        price: 15000.0,
        description: "Bright projector for movies and presentations. Wi-Fi support.",
        location: "Astana, Yesil district",
        tags: "electronics,movies",
        category: "cat-electronics",
        author: "usr-demo-timur",
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for seed in ITEM_SEEDS {
            let insert = Query::insert()
                .into_table(Items::Table)
                .columns([
                    Items::Id,
                    Items::Title,
                    Items::Description,
                    Items::Price,
                    Items::Location,
                    Items::Category,
                    Items::Tags,
                    Items::Author,
                    Items::CreatedAt,
                ])
                .values_panic([
                    seed.id.into(),
                    seed.title.into(),
                    seed.description.into(),
                    seed.price.into(),
                    seed.location.into(),
                    seed.category.into(),
                    seed.tags.into(),
                    seed.author.into(),
                    Expr::current_timestamp().into(),
                ])
                .on_conflict(OnConflict::column(Items::Id).do_nothing().to_owned())
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        // One example rental on the projector, 12..15 Aug 2025 inclusive.
        let date = |d| NaiveDate::from_ymd_opt(2025, 8, d);
        let rental = Query::insert()
            .into_table(Rentals::Table)
            .columns([
                Rentals::Id,
                Rentals::ItemId,
                Rentals::RenterId,
                Rentals::DateStart,
                Rentals::DateEnd,
                Rentals::CreatedAt,
            ])
            .values_panic([
                "rnt-demo-projector".into(),
                "itm-demo-projector".into(),
                "usr-demo-alina".into(),
                date(12).into(),
                date(15).into(),
                Expr::current_timestamp().into(),
            ])
            .on_conflict(OnConflict::column(Rentals::Id).do_nothing().to_owned())
            .to_owned();
        manager.exec_stmt(rental).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Rentals::Table)
                    .and_where(Expr::col(Rentals::Id).eq("rnt-demo-projector"))
                    .to_owned(),
            )
            .await?;

        let ids: Vec<&str> = ITEM_SEEDS.iter().map(|s| s.id).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Items::Table)
                    .and_where(Expr::col(Items::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
