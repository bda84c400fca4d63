use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::list_share::model::ListShare;
use business::domain::list_share::repository::ListShareRepository;
use business::domain::shared::value_objects::Identity;

use super::entity::ListShareEntity;

pub struct ListShareRepositoryPostgres {
    pool: PgPool,
}

impl ListShareRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListShareRepository for ListShareRepositoryPostgres {
    async fn find_for_identity(
        &self,
        list_id: Uuid,
        identity: &Identity,
    ) -> Result<Option<ListShare>, RepositoryError> {
        let entity = sqlx::query_as::<_, ListShareEntity>(
            "SELECT id, list_id, shared_principal, created_at FROM list_shares WHERE list_id = $1 AND shared_principal = ANY($2)",
        )
        .bind(list_id)
        .bind(identity.principals())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<ListShare>, RepositoryError> {
        let entities = sqlx::query_as::<_, ListShareEntity>(
            "SELECT id, list_id, shared_principal, created_at FROM list_shares WHERE list_id = $1 ORDER BY created_at",
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists(&self, list_id: Uuid, principal: &str) -> Result<bool, RepositoryError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM list_shares WHERE list_id = $1 AND shared_principal = $2)",
        )
        .bind(list_id)
        .bind(principal)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(exists.0)
    }

    async fn save(&self, share: &ListShare) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO list_shares (id, list_id, shared_principal, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(share.id)
        .bind(share.list_id)
        .bind(&share.shared_principal)
        .bind(share.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }

    async fn delete(&self, list_id: Uuid, principal: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM list_shares WHERE list_id = $1 AND shared_principal = $2")
            .bind(list_id)
            .bind(principal)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
