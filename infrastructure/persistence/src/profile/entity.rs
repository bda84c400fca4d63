use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::profile::model::UserProfile;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct UserProfileEntity {
    pub id: Uuid,
    pub user_id: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfileEntity {
    pub fn into_domain(self) -> UserProfile {
        UserProfile::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.display_name,
            self.photo_url,
            self.created_at,
            self.updated_at,
        )
    }
}
