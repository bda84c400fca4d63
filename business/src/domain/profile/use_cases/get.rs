use async_trait::async_trait;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::shared::value_objects::UserId;

/// Fetches the caller's profile, creating it on first access seeded
/// from the identity provider's display name and picture.
pub struct GetProfileParams {
    pub user_id: UserId,
    pub seed_display_name: Option<String>,
    pub seed_photo_url: Option<String>,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<UserProfile, ProfileError>;
}
