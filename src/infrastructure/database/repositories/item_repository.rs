//! SeaORM implementation of ItemRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::item::{Item, ItemQuery, ItemRepository, ItemSort};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::item;

pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: item::Model) -> Item {
    Item {
        id: m.id,
        title: m.title,
        description: m.description,
        price: m.price,
        location: m.location,
        category: m.category,
        tags: split_tags(&m.tags),
        author: m.author,
        created_at: m.created_at,
    }
}

/// Tags are stored as one comma-separated column.
fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

// ── ItemRepository impl ─────────────────────────────────────────

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Item>> {
        let model = item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(&self, query: &ItemQuery) -> DomainResult<Vec<Item>> {
        let mut select = item::Entity::find();

        if let Some(max_price) = query.max_price {
            select = select.filter(item::Column::Price.lte(max_price));
        }
        if let Some(location) = &query.location {
            select = select.filter(item::Column::Location.contains(location.as_str()));
        }
        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(item::Column::Title.contains(search.as_str()))
                    .add(item::Column::Description.contains(search.as_str()))
                    .add(item::Column::Tags.contains(search.as_str())),
            );
        }
        if let Some(category) = &query.category {
            select = select.filter(item::Column::Category.eq(category.as_str()));
        }

        select = match query.sort {
            ItemSort::CreatedDesc => select.order_by_desc(item::Column::CreatedAt),
            ItemSort::CreatedAsc => select.order_by_asc(item::Column::CreatedAt),
            ItemSort::PriceAsc => select.order_by_asc(item::Column::Price),
            ItemSort::PriceDesc => select.order_by_desc(item::Column::Price),
        };

        if query.offset > 0 {
            select = select.offset(query.offset);
        }
        if query.limit > 0 {
            select = select.limit(query.limit);
        }

        let models = select.all(&self.db).await.map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_column_splits_on_commas() {
        assert_eq!(split_tags("tools, renovation"), vec!["tools", "renovation"]);
        assert_eq!(split_tags("bike"), vec!["bike"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ").is_empty());
    }
}
