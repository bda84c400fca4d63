use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::get::{GetProfileParams, GetProfileUseCase};

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<UserProfile, ProfileError> {
        if let Some(profile) = self.repository.find_by_user(&params.user_id).await? {
            return Ok(profile);
        }

        // First fetch for this identity: create the record seeded from
        // the provider's claims.
        let profile = UserProfile::new(
            params.user_id,
            params.seed_display_name,
            params.seed_photo_url,
        );
        self.repository.save(&profile).await?;

        self.logger
            .info(&format!("Profile created for user {}", profile.user_id));
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub ProfileRepo {}

        #[async_trait]
        impl ProfileRepository for ProfileRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, RepositoryError>;
            async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn first_fetch_creates_a_seeded_profile() {
        let mut repo = MockProfileRepo::new();
        repo.expect_find_by_user().returning(|_| Ok(None));
        repo.expect_save().returning(|_| Ok(()));

        let use_case = GetProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(GetProfileParams {
                user_id: UserId::new("user-a"),
                seed_display_name: Some("Ana".to_string()),
                seed_photo_url: Some("https://example.com/a.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(profile.display_name.as_deref(), Some("Ana"));
        assert_eq!(
            profile.photo_url.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[tokio::test]
    async fn existing_profile_is_returned_untouched() {
        let mut repo = MockProfileRepo::new();
        repo.expect_find_by_user().returning(|user_id| {
            Ok(Some(UserProfile::new(
                user_id.clone(),
                Some("Stored".to_string()),
                None,
            )))
        });

        let use_case = GetProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(GetProfileParams {
                user_id: UserId::new("user-a"),
                seed_display_name: Some("Fresh".to_string()),
                seed_photo_url: None,
            })
            .await
            .unwrap();

        assert_eq!(profile.display_name.as_deref(), Some("Stored"));
    }
}
