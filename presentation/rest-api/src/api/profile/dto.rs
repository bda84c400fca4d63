use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::profile::model::UserProfile;

#[derive(Debug, Clone, Object)]
pub struct UpdateProfileRequest {
    /// New display name (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub display_name: Option<String>,
    /// New photo URL (must be a valid URL)
    #[oai(skip_serializing_if_is_none)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProfileResponse {
    /// Profile unique identifier
    pub id: String,
    /// Stable user id from the identity provider
    pub user_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub display_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub photo_url: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.as_str().to_string(),
            display_name: profile.display_name,
            photo_url: profile.photo_url,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
