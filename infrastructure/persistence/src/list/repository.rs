use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::list::model::List;
use business::domain::list::repository::ListRepository;
use business::domain::shared::value_objects::{Identity, UserId};

use super::entity::ListEntity;

pub struct ListRepositoryPostgres {
    pool: PgPool,
}

impl ListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for ListRepositoryPostgres {
    async fn get_owned(&self, owner: &UserId) -> Result<Vec<List>, RepositoryError> {
        let entities = sqlx::query_as::<_, ListEntity>(
            "SELECT id, name, owner_user_id, created_at, updated_at FROM lists WHERE owner_user_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_shared(&self, identity: &Identity) -> Result<Vec<List>, RepositoryError> {
        // One query for every principal the caller may be shared under;
        // DISTINCT folds lists shared under both id and email.
        let entities = sqlx::query_as::<_, ListEntity>(
            r#"SELECT DISTINCT l.id, l.name, l.owner_user_id, l.created_at, l.updated_at
            FROM lists l
            JOIN list_shares ls ON ls.list_id = l.id
            WHERE ls.shared_principal = ANY($1)
            ORDER BY l.created_at DESC"#,
        )
        .bind(identity.principals())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<List, RepositoryError> {
        let entity = sqlx::query_as::<_, ListEntity>(
            "SELECT id, name, owner_user_id, created_at, updated_at FROM lists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, list: &List) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO lists (id, name, owner_user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(list.id)
        .bind(&list.name)
        .bind(list.owner_user_id.as_ref().map(|o| o.as_str()))
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn set_markets(
        &self,
        list_id: Uuid,
        market_ids: &[Uuid],
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM list_markets WHERE list_id = $1")
            .bind(list_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        for market_id in market_ids {
            sqlx::query("INSERT INTO list_markets (list_id, market_id) VALUES ($1, $2)")
                .bind(list_id)
                .bind(market_id)
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Cascade order: items, market links, shares, list.
        sqlx::query("DELETE FROM items WHERE list_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM list_markets WHERE list_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM list_shares WHERE list_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
