use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::profile::model::UserProfile;
use business::domain::profile::repository::ProfileRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::UserProfileEntity;

pub struct ProfileRepositoryPostgres {
    pool: PgPool,
}

impl ProfileRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserProfile>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserProfileEntity>(
            "SELECT id, user_id, display_name, photo_url, created_at, updated_at FROM user_profiles WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_profiles (id, user_id, display_name, photo_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                photo_url = EXCLUDED.photo_url,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(profile.id)
        .bind(profile.user_id.as_str())
        .bind(&profile.display_name)
        .bind(&profile.photo_url)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
