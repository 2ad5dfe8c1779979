//! SeaORM implementation of RentalRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;

use crate::domain::rental::{Rental, RentalRepository};
use crate::domain::{DatePeriod, DomainError, DomainResult};
use crate::infrastructure::database::entities::rental;

pub struct SeaOrmRentalRepository {
    db: DatabaseConnection,
}

impl SeaOrmRentalRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: rental::Model) -> Rental {
    Rental {
        id: m.id,
        item_id: m.item_id,
        renter_id: m.renter_id,
        // Normalizing here keeps a malformed stored row from ever reaching
        // the conflict checker or the schedule compactor unordered.
        period: DatePeriod::new(m.date_start, m.date_end),
        created_at: m.created_at,
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── RentalRepository impl ───────────────────────────────────────

#[async_trait]
impl RentalRepository for SeaOrmRentalRepository {
    async fn save(&self, r: Rental) -> DomainResult<Rental> {
        debug!("Saving rental: {}", r.id);

        let model = rental::ActiveModel {
            id: Set(r.id),
            item_id: Set(r.item_id),
            renter_id: Set(r.renter_id),
            date_start: Set(r.period.start()),
            date_end: Set(r.period.end()),
            created_at: Set(r.created_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_item(&self, item_id: &str) -> DomainResult<Vec<Rental>> {
        let models = rental::Entity::find()
            .filter(rental::Column::ItemId.eq(item_id))
            .order_by_desc(rental::Column::DateStart)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
