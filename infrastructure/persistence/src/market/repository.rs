use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::market::model::Market;
use business::domain::market::repository::MarketRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::MarketEntity;

pub struct MarketRepositoryPostgres {
    pool: PgPool,
}

impl MarketRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarketRepository for MarketRepositoryPostgres {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Market>, RepositoryError> {
        let entities = sqlx::query_as::<_, MarketEntity>(
            "SELECT id, name, owner_user_id, created_at, updated_at FROM markets WHERE owner_user_id = $1 ORDER BY name",
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, owner: &UserId) -> Result<Market, RepositoryError> {
        let entity = sqlx::query_as::<_, MarketEntity>(
            "SELECT id, name, owner_user_id, created_at, updated_at FROM markets WHERE id = $1 AND owner_user_id = $2",
        )
        .bind(id)
        .bind(owner.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<Market>, RepositoryError> {
        let entities = sqlx::query_as::<_, MarketEntity>(
            r#"SELECT m.id, m.name, m.owner_user_id, m.created_at, m.updated_at
            FROM markets m
            JOIN list_markets lm ON m.id = lm.market_id
            WHERE lm.list_id = $1
            ORDER BY m.name"#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn is_linked(&self, list_id: Uuid, market_id: Uuid) -> Result<bool, RepositoryError> {
        let linked: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM list_markets WHERE list_id = $1 AND market_id = $2)",
        )
        .bind(list_id)
        .bind(market_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(linked.0)
    }

    async fn save(&self, market: &Market) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO markets (id, name, owner_user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(market.id)
        .bind(&market.name)
        .bind(market.owner_user_id.as_str())
        .bind(market.created_at)
        .bind(market.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid, owner: &UserId) -> Result<(), RepositoryError> {
        // Sequential cascade: unlink from lists, detach items, then
        // drop the market row itself. Items are kept.
        sqlx::query("DELETE FROM list_markets WHERE market_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("UPDATE items SET market_id = NULL WHERE market_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM markets WHERE id = $1 AND owner_user_id = $2")
            .bind(id)
            .bind(owner.as_str())
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
