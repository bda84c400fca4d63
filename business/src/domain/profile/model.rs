use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::ProfileError;

/// Per-identity profile record, lazily created on first fetch and
/// seeded from the identity provider's name and picture.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: UserId,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: UserId, display_name: Option<String>, photo_url: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            display_name,
            photo_url,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        display_name: Option<String>,
        photo_url: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            display_name,
            photo_url,
            created_at,
            updated_at,
        }
    }

    pub fn set_display_name(&mut self, display_name: String) -> Result<(), ProfileError> {
        if display_name.trim().is_empty() {
            return Err(ProfileError::DisplayNameEmpty);
        }
        self.display_name = Some(display_name);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_photo_url(&mut self, photo_url: String) -> Result<(), ProfileError> {
        if Url::parse(&photo_url).is_err() {
            return Err(ProfileError::InvalidPhotoUrl);
        }
        self.photo_url = Some(photo_url);
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_display_name() {
        let mut profile = UserProfile::new(UserId::new("u1"), None, None);

        let result = profile.set_display_name(" ".to_string());

        assert!(matches!(result.unwrap_err(), ProfileError::DisplayNameEmpty));
    }

    #[test]
    fn should_reject_malformed_photo_url() {
        let mut profile = UserProfile::new(UserId::new("u1"), None, None);

        let result = profile.set_photo_url("not a url".to_string());

        assert!(matches!(result.unwrap_err(), ProfileError::InvalidPhotoUrl));
    }

    #[test]
    fn should_accept_valid_updates() {
        let mut profile = UserProfile::new(UserId::new("u1"), None, None);

        profile.set_display_name("Ana".to_string()).unwrap();
        profile
            .set_photo_url("https://example.com/ana.png".to_string())
            .unwrap();

        assert_eq!(profile.display_name.as_deref(), Some("Ana"));
        assert_eq!(
            profile.photo_url.as_deref(),
            Some("https://example.com/ana.png")
        );
    }
}
