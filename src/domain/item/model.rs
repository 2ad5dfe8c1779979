//! Item domain entity

use chrono::{DateTime, Utc};

/// A rentable item in the catalog.
///
/// `category` and `author` are opaque identifiers owned by whoever
/// administers the catalog; this service only filters on them.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Rental price per day, in the catalog's currency
    pub price: f64,
    pub location: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}
