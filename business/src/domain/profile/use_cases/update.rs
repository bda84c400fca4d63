use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateProfileParams {
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, ProfileError>;
}
