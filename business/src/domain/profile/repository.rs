use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::UserProfile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &UserId)
    -> Result<Option<UserProfile>, RepositoryError>;
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
}
