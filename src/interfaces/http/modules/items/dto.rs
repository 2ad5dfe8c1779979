//! Item DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Item, ItemQuery, ItemSort};

/// Catalog item in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Rental price per day
    pub price: f64,
    pub location: String,
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl ItemDto {
    pub fn from_domain(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price: item.price,
            location: item.location,
            category: item.category,
            tags: item.tags,
            author: item.author,
            created_at: item.created_at,
        }
    }
}

/// Catalog listing query parameters; all filters optional and conjunctive
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsParams {
    /// Only items priced at or below this value
    pub max_price: Option<f64>,
    /// Substring match on location
    pub location: Option<String>,
    /// Substring match on title, description or tags
    pub search: Option<String>,
    /// Exact category ID
    pub category: Option<String>,
    /// `-created` (default), `created`, `price` or `-price`
    pub sort: Option<String>,
    /// Page size; 0 or absent = unlimited
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl ListItemsParams {
    pub fn into_query(self) -> ItemQuery {
        ItemQuery {
            max_price: self.max_price,
            location: none_if_blank(self.location),
            search: none_if_blank(self.search),
            category: none_if_blank(self.category),
            sort: self
                .sort
                .as_deref()
                .map(ItemSort::from_param)
                .unwrap_or_default(),
            limit: self.limit.unwrap_or(0),
            offset: self.offset.unwrap_or(0),
        }
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
