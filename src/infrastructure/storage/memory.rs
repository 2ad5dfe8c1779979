//! In-memory store for development and testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::item::{Item, ItemQuery, ItemRepository, ItemSort};
use crate::domain::rental::{Rental, RentalRepository};
use crate::domain::{DomainResult, RepositoryProvider};

/// DashMap-backed implementation of the repository traits.
///
/// Mirrors the SeaORM repositories' observable behavior (filtering, sort
/// order) so service tests can run without a database.
pub struct InMemoryStore {
    items: DashMap<String, Item>,
    rentals: DashMap<String, Rental>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
            rentals: DashMap::new(),
        }
    }

    pub fn add_item(&self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// A minimal catalog entry for tests.
    pub fn sample_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Item {id}"),
            description: String::new(),
            price: 100.0,
            location: "Downtown".to_string(),
            category: "tools".to_string(),
            tags: Vec::new(),
            author: "usr-owner".to_string(),
            created_at: Utc::now(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(item: &Item, query: &ItemQuery) -> bool {
    if let Some(max) = query.max_price {
        if item.price > max {
            return false;
        }
    }
    if let Some(location) = &query.location {
        if !item
            .location
            .to_lowercase()
            .contains(&location.to_lowercase())
        {
            return false;
        }
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        let in_tags = item.tags.iter().any(|t| t.to_lowercase().contains(&needle));
        if !item.title.to_lowercase().contains(&needle)
            && !item.description.to_lowercase().contains(&needle)
            && !in_tags
        {
            return false;
        }
    }
    if let Some(category) = &query.category {
        if item.category != *category {
            return false;
        }
    }
    true
}

#[async_trait]
impl ItemRepository for InMemoryStore {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>> {
        Ok(self.items.get(id).map(|i| i.clone()))
    }

    async fn list(&self, query: &ItemQuery) -> DomainResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|e| matches(e.value(), query))
            .map(|e| e.value().clone())
            .collect();

        match query.sort {
            ItemSort::CreatedDesc => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ItemSort::CreatedAsc => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ItemSort::PriceAsc => items.sort_by(|a, b| a.price.total_cmp(&b.price)),
            ItemSort::PriceDesc => items.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        let items = items.into_iter().skip(query.offset as usize);
        Ok(if query.limit > 0 {
            items.take(query.limit as usize).collect()
        } else {
            items.collect()
        })
    }
}

#[async_trait]
impl RentalRepository for InMemoryStore {
    async fn save(&self, rental: Rental) -> DomainResult<Rental> {
        self.rentals.insert(rental.id.clone(), rental.clone());
        Ok(rental)
    }

    async fn find_by_item(&self, item_id: &str) -> DomainResult<Vec<Rental>> {
        let mut rentals: Vec<Rental> = self
            .rentals
            .iter()
            .filter(|e| e.value().item_id == item_id)
            .map(|e| e.value().clone())
            .collect();
        rentals.sort_by(|a, b| b.period.start().cmp(&a.period.start()));
        Ok(rentals)
    }
}

impl RepositoryProvider for InMemoryStore {
    fn items(&self) -> &dyn ItemRepository {
        self
    }

    fn rentals(&self) -> &dyn RentalRepository {
        self
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatePeriod;
    use chrono::{Duration, NaiveDate};

    fn item(id: &str, price: f64, location: &str, category: &str, age_days: i64) -> Item {
        Item {
            id: id.to_string(),
            title: format!("{category} {id}"),
            description: format!("a {category} available in {location}"),
            price,
            location: location.to_string(),
            category: category.to_string(),
            tags: vec![category.to_string()],
            author: "usr-owner".to_string(),
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    fn seeded() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.add_item(item("itm-1", 50.0, "Downtown", "tools", 3));
        store.add_item(item("itm-2", 150.0, "Uptown", "tools", 2));
        store.add_item(item("itm-3", 80.0, "Downtown", "bikes", 1));
        store
    }

    #[tokio::test]
    async fn filters_compose_conjunctively() {
        let store = seeded();
        let query = ItemQuery {
            max_price: Some(100.0),
            location: Some("down".to_string()),
            category: Some("tools".to_string()),
            ..Default::default()
        };
        let found = store.list(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "itm-1");
    }

    #[tokio::test]
    async fn search_matches_title_description_and_tags() {
        let store = seeded();
        let query = ItemQuery {
            search: Some("BIKE".to_string()),
            ..Default::default()
        };
        let found = store.list(&query).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "itm-3");
    }

    #[tokio::test]
    async fn default_sort_is_newest_first() {
        let store = seeded();
        let ids: Vec<String> = store
            .list(&ItemQuery::default())
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["itm-3", "itm-2", "itm-1"]);
    }

    #[tokio::test]
    async fn price_sort_and_pagination() {
        let store = seeded();
        let query = ItemQuery {
            sort: ItemSort::PriceAsc,
            limit: 2,
            offset: 1,
            ..Default::default()
        };
        let ids: Vec<String> = store
            .list(&query)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["itm-3", "itm-2"]);
    }

    #[tokio::test]
    async fn rentals_are_listed_newest_start_first() {
        let store = InMemoryStore::new();
        let d = |day| NaiveDate::from_ymd_opt(2025, 8, day).unwrap();

        for (start, end) in [(1, 2), (20, 22), (10, 11)] {
            store
                .save(Rental::new("itm-1", "usr-1", DatePeriod::new(d(start), d(end))))
                .await
                .unwrap();
        }
        store
            .save(Rental::new("itm-2", "usr-1", DatePeriod::new(d(5), d(6))))
            .await
            .unwrap();

        let starts: Vec<NaiveDate> = store
            .find_by_item("itm-1")
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.period.start())
            .collect();
        assert_eq!(starts, vec![d(20), d(10), d(1)]);
    }
}
