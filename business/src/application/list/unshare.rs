use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::list::errors::ListError;
use crate::domain::list::use_cases::unshare::{UnshareListParams, UnshareListUseCase};
use crate::domain::list_share::repository::ListShareRepository;
use crate::domain::logger::Logger;

pub struct UnshareListUseCaseImpl {
    pub share_repository: Arc<dyn ListShareRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UnshareListUseCase for UnshareListUseCaseImpl {
    async fn execute(&self, params: UnshareListParams) -> Result<(), ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;
        if !access.can_manage() {
            return Err(ListError::AccessDenied);
        }

        self.share_repository
            .delete(params.id, &params.principal)
            .await?;

        self.logger.info(&format!(
            "List {} unshared from {}",
            params.id, params.principal
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::errors::AccessError;
    use crate::domain::access::model::ListAccess;
    use crate::domain::errors::RepositoryError;
    use crate::domain::list_share::model::ListShare;
    use crate::domain::shared::value_objects::{Email, Identity, UserId};
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

    #[tokio::test]
    async fn owner_revokes_a_share() {
        let mut share_repo = MockShareRepo::new();
        share_repo.expect_delete().returning(|_, _| Ok(()));
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Owner));

        let use_case = UnshareListUseCaseImpl {
            share_repository: Arc::new(share_repo),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UnshareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                principal: "b@example.com".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn shared_user_cannot_unshare_others() {
        let share_repo = MockShareRepo::new();
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Shared));

        let use_case = UnshareListUseCaseImpl {
            share_repository: Arc::new(share_repo),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UnshareListParams {
                id: Uuid::new_v4(),
                identity: identity_a(),
                principal: "c@example.com".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::AccessDenied));
    }
}
