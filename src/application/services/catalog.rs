//! Item catalog service

use std::sync::Arc;

use crate::domain::{DomainResult, Item, ItemQuery, RepositoryProvider};

/// Read-only catalog queries: listing with filters, item lookup.
pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_items(&self, query: &ItemQuery) -> DomainResult<Vec<Item>> {
        self.repos.items().list(query).await
    }

    pub async fn get_item(&self, id: &str) -> DomainResult<Option<Item>> {
        self.repos.items().find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemSort;
    use crate::infrastructure::storage::InMemoryStore;

    fn catalog() -> CatalogService {
        let store = InMemoryStore::new();
        store.add_item(InMemoryStore::sample_item("itm-1"));
        store.add_item(InMemoryStore::sample_item("itm-2"));
        CatalogService::new(Arc::new(store))
    }

    #[tokio::test]
    async fn get_item_returns_none_for_unknown_id() {
        let svc = catalog();
        assert!(svc.get_item("itm-1").await.unwrap().is_some());
        assert!(svc.get_item("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_items_defaults_to_all() {
        let svc = catalog();
        let query = ItemQuery {
            sort: ItemSort::CreatedDesc,
            ..Default::default()
        };
        assert_eq!(svc.list_items(&query).await.unwrap().len(), 2);
    }
}
