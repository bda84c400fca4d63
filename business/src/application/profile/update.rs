use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::update::{UpdateProfileParams, UpdateProfileUseCase};

pub struct UpdateProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, ProfileError> {
        // The record may not exist yet if the user never fetched their
        // profile; updating still works against a fresh one.
        let mut profile = self
            .repository
            .find_by_user(&params.user_id)
            .await?
            .unwrap_or_else(|| UserProfile::new(params.user_id.clone(), None, None));

        if let Some(display_name) = params.display_name {
            profile.set_display_name(display_name)?;
        }
        if let Some(photo_url) = params.photo_url {
            profile.set_photo_url(photo_url)?;
        }

        self.repository.save(&profile).await?;

        self.logger
            .info(&format!("Profile updated for user {}", profile.user_id));
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
    async fn updates_only_supplied_fields() {
        let mut repo = MockProfileRepo::new();
        repo.expect_find_by_user().returning(|user_id| {
            Ok(Some(UserProfile::new(
                user_id.clone(),
                Some("Ana".to_string()),
                Some("https://example.com/a.png".to_string()),
            )))
        });
        repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(UpdateProfileParams {
                user_id: UserId::new("user-a"),
                display_name: Some("Ana Maria".to_string()),
                photo_url: None,
            })
            .await
            .unwrap();

        assert_eq!(profile.display_name.as_deref(), Some("Ana Maria"));
        assert_eq!(
            profile.photo_url.as_deref(),
            Some("https://example.com/a.png")
        );
    }

    #[tokio::test]
    async fn invalid_photo_url_is_rejected_before_save() {
        let mut repo = MockProfileRepo::new();
        repo.expect_find_by_user()
            .returning(|user_id| Ok(Some(UserProfile::new(user_id.clone(), None, None))));

        let use_case = UpdateProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProfileParams {
                user_id: UserId::new("user-a"),
                display_name: None,
                photo_url: Some("nope".to_string()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProfileError::InvalidPhotoUrl));
    }
}
