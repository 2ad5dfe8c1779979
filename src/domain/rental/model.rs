//! Rental domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::period::DatePeriod;

/// A persisted claim on an item for an inclusive range of calendar days.
///
/// Rentals are immutable once created; there is no update or cancel
/// operation in this service.
#[derive(Debug, Clone)]
pub struct Rental {
    /// Unique rental ID
    pub id: String,
    /// Rented item ID
    pub item_id: String,
    /// Renter account ID
    pub renter_id: String,
    /// Calendar days held by this rental, both ends inclusive
    pub period: DatePeriod,
    /// When the rental was created
    pub created_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(item_id: impl Into<String>, renter_id: impl Into<String>, period: DatePeriod) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_id: item_id.into(),
            renter_id: renter_id.into(),
            period,
            created_at: Utc::now(),
        }
    }
}
