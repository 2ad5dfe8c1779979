//! Item repository interface

use async_trait::async_trait;

use super::model::Item;
use crate::domain::DomainResult;

/// Catalog listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemSort {
    /// Newest first (listing default)
    #[default]
    CreatedDesc,
    CreatedAsc,
    PriceAsc,
    PriceDesc,
}

impl ItemSort {
    /// Parse the `sort` query parameter; a leading `-` means descending.
    /// Unknown values fall back to the default order.
    pub fn from_param(s: &str) -> Self {
        match s {
            "created" => Self::CreatedAsc,
            "-created" => Self::CreatedDesc,
            "price" => Self::PriceAsc,
            "-price" => Self::PriceDesc,
            _ => Self::default(),
        }
    }
}

/// Catalog listing filters. All filters are conjunctive; `None` means
/// "do not filter on this field".
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    pub max_price: Option<f64>,
    /// Case-insensitive substring match on location
    pub location: Option<String>,
    /// Case-insensitive substring match on title, description or tags
    pub search: Option<String>,
    /// Exact category ID match
    pub category: Option<String>,
    pub sort: ItemSort,
    /// 0 = no limit
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>>;

    /// Items matching the query, in the query's sort order.
    async fn list(&self, query: &ItemQuery) -> DomainResult<Vec<Item>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_param_parsing() {
        assert_eq!(ItemSort::from_param("-created"), ItemSort::CreatedDesc);
        assert_eq!(ItemSort::from_param("created"), ItemSort::CreatedAsc);
        assert_eq!(ItemSort::from_param("price"), ItemSort::PriceAsc);
        assert_eq!(ItemSort::from_param("-price"), ItemSort::PriceDesc);
        assert_eq!(ItemSort::from_param(""), ItemSort::CreatedDesc);
        assert_eq!(ItemSort::from_param("bogus"), ItemSort::CreatedDesc);
    }
}
