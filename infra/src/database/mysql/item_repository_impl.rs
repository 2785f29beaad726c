//! MySQL implementation of the ItemRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use si_core::domain::entities::{Id, Item};
use si_core::errors::DomainError;
use si_core::repositories::ItemRepository;

use super::{column, inserted_id, query_failed};

const ITEM_COLUMNS: &str = "id, name, description, available, owner_id, request_id";

/// MySQL implementation of ItemRepository
pub struct MySqlItemRepository {
    pool: MySqlPool,
}

impl MySqlItemRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_item(row: &MySqlRow) -> Result<Item, DomainError> {
        Ok(Item {
            id: column(row, "id")?,
            name: column(row, "name")?,
            description: column(row, "description")?,
            available: column(row, "available")?,
            owner_id: column(row, "owner_id")?,
            request_id: column(row, "request_id")?,
        })
    }
}

#[async_trait]
impl ItemRepository for MySqlItemRepository {
    async fn find_by_id(&self, id: Id) -> Result<Option<Item>, DomainError> {
        let query = format!("SELECT {} FROM items WHERE id = ? LIMIT 1", ITEM_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        row.as_ref().map(Self::row_to_item).transpose()
    }

    async fn find_by_owner(&self, owner_id: Id) -> Result<Vec<Item>, DomainError> {
        let query = format!("SELECT {} FROM items WHERE owner_id = ? ORDER BY id", ITEM_COLUMNS);
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn search_available(&self, text: &str) -> Result<Vec<Item>, DomainError> {
        let query = format!(
            "SELECT {} FROM items \
             WHERE available = TRUE \
               AND (LOCATE(?, LOWER(name)) > 0 OR LOCATE(?, LOWER(description)) > 0) \
             ORDER BY id",
            ITEM_COLUMNS
        );
        let needle = text.to_lowercase();
        let rows = sqlx::query(&query)
            .bind(&needle)
            .bind(&needle)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_item).collect()
    }

    async fn create(&self, mut item: Item) -> Result<Item, DomainError> {
        let result = sqlx::query(
            "INSERT INTO items (name, description, available, owner_id, request_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.available)
        .bind(item.owner_id)
        .bind(item.request_id)
        .execute(&self.pool)
        .await
        .map_err(query_failed)?;

        item.id = inserted_id(result.last_insert_id())?;
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        sqlx::query("UPDATE items SET name = ?, description = ?, available = ?, request_id = ? WHERE id = ?")
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.available)
            .bind(item.request_id)
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(item)
    }
}
