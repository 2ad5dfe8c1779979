//! Rental DTOs

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Rental;

/// Request to rent an item for a span of calendar days
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRentalRequest {
    /// Renter account ID
    #[validate(length(min = 1, message = "renter_id must not be empty"))]
    pub renter_id: String,
    /// First rented day: RFC 3339 date-time or `YYYY-MM-DD`
    #[validate(length(min = 1, message = "date_start must not be empty"))]
    pub date_start: String,
    /// Last rented day, inclusive: RFC 3339 date-time or `YYYY-MM-DD`
    #[validate(length(min = 1, message = "date_end must not be empty"))]
    pub date_end: String,
}

/// Rental details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct RentalDto {
    pub id: String,
    pub item_id: String,
    pub renter_id: String,
    /// First rented calendar day, inclusive
    pub date_start: NaiveDate,
    /// Last rented calendar day, inclusive
    pub date_end: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl RentalDto {
    pub fn from_domain(r: Rental) -> Self {
        Self {
            id: r.id,
            item_id: r.item_id,
            renter_id: r.renter_id,
            date_start: r.period.start(),
            date_end: r.period.end(),
            created_at: r.created_at,
        }
    }
}

/// Parse a rental boundary supplied by the client.
///
/// Accepts a full RFC 3339 timestamp or a plain calendar date. Rentals
/// are keyed to the calendar date the client wrote, so the offset is
/// dropped rather than converted: `2025-08-01T01:00:00+05:00` means
/// August 1, not July 31.
pub fn parse_day_bound(field: &str, value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local().and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(format!(
        "invalid {field} '{value}', expected RFC 3339 or YYYY-MM-DD"
    ))
}
