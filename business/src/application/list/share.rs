use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::list::errors::ListError;
use crate::domain::list::use_cases::share::{ShareListParams, ShareListUseCase};
use crate::domain::list_share::model::ListShare;
use crate::domain::list_share::repository::ListShareRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Email;

/// Records an invite by email. The invitee gains access the moment they
/// log in with that address; they do not need an account yet.
pub struct ShareListUseCaseImpl {
    pub share_repository: Arc<dyn ListShareRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ShareListUseCase for ShareListUseCaseImpl {
    async fn execute(&self, params: ShareListParams) -> Result<ListShare, ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;
        if !access.can_manage() {
            return Err(ListError::AccessDenied);
        }

        let email = Email::new(params.email).map_err(|_| ListError::InvalidShareEmail)?;

        if self
            .share_repository
            .exists(params.id, email.as_str())
            .await?
        {
            return Err(ListError::AlreadyShared);
        }

        let share = ListShare::new(params.id, email.as_str().to_string());
        self.share_repository.save(&share).await?;

        self.logger
            .info(&format!("List {} shared with {}", params.id, email));
        Ok(share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::errors::AccessError;
    use crate::domain::access::model::ListAccess;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{Identity, UserId};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ShareRepo {}

        #[async_trait]
        impl ListShareRepository for ShareRepo {
            async fn find_for_identity(&self, list_id: Uuid, identity: &Identity) -> Result<Option<ListShare>, RepositoryError>;
            async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<ListShare>, RepositoryError>;
            async fn exists(&self, list_id: Uuid, principal: &str) -> Result<bool, RepositoryError>;
            async fn save(&self, share: &ListShare) -> Result<(), RepositoryError>;
            async fn delete(&self, list_id: Uuid, principal: &str) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Authorizer {}

        #[async_trait]
        impl ListAccessAuthorizer for Authorizer {
            async fn authorize(&self, list_id: Uuid, identity: &Identity) -> Result<ListAccess, AccessError>;
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

    fn identity_a() -> Identity {
        Identity::new(UserId::new("user-a"), Email::new("a@example.com").unwrap())
    }

    fn owner_authorizer() -> MockAuthorizer {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Owner));
        authorizer
    }

    fn use_case(share_repo: MockShareRepo, authorizer: MockAuthorizer) -> ShareListUseCaseImpl {
        ShareListUseCaseImpl {
            share_repository: Arc::new(share_repo),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn owner_shares_by_email() {
        let mut share_repo = MockShareRepo::new();
        share_repo.expect_exists().returning(|_, _| Ok(false));
        share_repo.expect_save().returning(|_| Ok(()));

        let share = use_case(share_repo, owner_authorizer())
            .execute(ShareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                email: "b@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(share.shared_principal, "b@example.com");
    }

    #[tokio::test]
    async fn duplicate_invite_is_a_conflict() {
        let mut share_repo = MockShareRepo::new();
        share_repo.expect_exists().returning(|_, _| Ok(true));

        let result = use_case(share_repo, owner_authorizer())
            .execute(ShareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                email: "b@example.com".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::AlreadyShared));
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_before_lookup() {
        let share_repo = MockShareRepo::new();

        let result = use_case(share_repo, owner_authorizer())
            .execute(ShareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                email: "not-an-email".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::InvalidShareEmail));
    }

    #[tokio::test]
    async fn shared_user_cannot_reshare() {
        let share_repo = MockShareRepo::new();
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Shared));

        let result = use_case(share_repo, authorizer)
            .execute(ShareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                email: "c@example.com".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::AccessDenied));
    }
}
