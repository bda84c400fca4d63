use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::ItemEntity;

const ITEM_COLUMNS: &str = "id, list_id, name, category, notes, is_purchased, price, quantity, market_id, created_at, updated_at";

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE list_id = $1 ORDER BY created_at"
        ))
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        // Full-row upsert: the purchase fields always travel together
        // with the flag, so no partial purchase state can be persisted.
        sqlx::query(
            r#"INSERT INTO items (id, list_id, name, category, notes, is_purchased, price, quantity, market_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                category = EXCLUDED.category,
                notes = EXCLUDED.notes,
                is_purchased = EXCLUDED.is_purchased,
                price = EXCLUDED.price,
                quantity = EXCLUDED.quantity,
                market_id = EXCLUDED.market_id,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(item.id)
        .bind(item.list_id)
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.notes)
        .bind(item.is_purchased)
        .bind(&item.price)
        .bind(&item.quantity)
        .bind(item.market_id)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
