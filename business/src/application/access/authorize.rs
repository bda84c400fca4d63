use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::access::errors::AccessError;
use crate::domain::access::model::ListAccess;
use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::errors::RepositoryError;
use crate::domain::list::repository::ListRepository;
use crate::domain::list_share::repository::ListShareRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Identity;

/// Owner-or-shared access decision backed by the store.
///
/// The share lookup matches any of the identity's principals, so an
/// invite recorded by email grants access once that email logs in.
pub struct ListAccessAuthorizerImpl {
    pub list_repository: Arc<dyn ListRepository>,
    pub share_repository: Arc<dyn ListShareRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListAccessAuthorizer for ListAccessAuthorizerImpl {
    async fn authorize(
        &self,
        list_id: Uuid,
        identity: &Identity,
    ) -> Result<ListAccess, AccessError> {
        let list = self
            .list_repository
            .get_by_id(list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AccessError::NotFound,
                other => AccessError::Repository(other),
            })?;

        if list.is_owned_by(&identity.user_id) {
            return Ok(ListAccess::Owner);
        }

        match self
            .share_repository
            .find_for_identity(list_id, identity)
            .await?
        {
            Some(_) => Ok(ListAccess::Shared),
            None => {
                self.logger.warn(&format!(
                    "Access denied to list {} for user {}",
                    list_id, identity.user_id
                ));
                Err(AccessError::Denied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::model::List;
    use crate::domain::list_share::model::ListShare;
    use crate::domain::shared::value_objects::{Email, UserId};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ListRepo {}

        #[async_trait]
        impl ListRepository for ListRepo {
            async fn get_owned(&self, owner: &UserId) -> Result<Vec<List>, RepositoryError>;
            async fn get_shared(&self, identity: &Identity) -> Result<Vec<List>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<List, RepositoryError>;
            async fn save(&self, list: &List) -> Result<(), RepositoryError>;
            async fn set_markets(&self, list_id: Uuid, market_ids: &[Uuid]) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

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

    fn identity_b() -> Identity {
        Identity::new(UserId::new("user-b"), Email::new("b@example.com").unwrap())
    }

    fn list_owned_by_a(id: Uuid) -> List {
        List::from_repository(
            id,
            "Groceries".to_string(),
            Some(UserId::new("user-a")),
            Utc::now(),
            Utc::now(),
        )
    }

    fn authorizer(
        list_repo: MockListRepo,
        share_repo: MockShareRepo,
    ) -> ListAccessAuthorizerImpl {
        ListAccessAuthorizerImpl {
            list_repository: Arc::new(list_repo),
            share_repository: Arc::new(share_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn owner_gets_owner_access() {
        let list_id = Uuid::new_v4();
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(move |id| Ok(list_owned_by_a(id)));
        let share_repo = MockShareRepo::new();

        let result = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_a())
            .await;

        assert!(matches!(result.unwrap(), ListAccess::Owner));
    }

    #[tokio::test]
    async fn share_grants_shared_access() {
        let list_id = Uuid::new_v4();
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(move |id| Ok(list_owned_by_a(id)));
        let mut share_repo = MockShareRepo::new();
        share_repo
            .expect_find_for_identity()
            .returning(|list_id, _| {
                Ok(Some(ListShare::new(list_id, "b@example.com".to_string())))
            });

        let result = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_b())
            .await;

        assert!(matches!(result.unwrap(), ListAccess::Shared));
    }

    #[tokio::test]
    async fn stranger_is_denied() {
        let list_id = Uuid::new_v4();
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(move |id| Ok(list_owned_by_a(id)));
        let mut share_repo = MockShareRepo::new();
        share_repo
            .expect_find_for_identity()
            .returning(|_, _| Ok(None));

        let result = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_b())
            .await;

        assert!(matches!(result.unwrap_err(), AccessError::Denied));
    }

    #[tokio::test]
    async fn missing_list_is_not_found_not_denied() {
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let share_repo = MockShareRepo::new();

        let result = authorizer(list_repo, share_repo)
            .authorize(Uuid::new_v4(), &identity_b())
            .await;

        assert!(matches!(result.unwrap_err(), AccessError::NotFound));
    }

    #[tokio::test]
    async fn revoking_the_only_share_flips_access_to_denied() {
        let list_id = Uuid::new_v4();

        // Before revocation: shared.
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(move |id| Ok(list_owned_by_a(id)));
        let mut share_repo = MockShareRepo::new();
        share_repo
            .expect_find_for_identity()
            .returning(|list_id, _| {
                Ok(Some(ListShare::new(list_id, "b@example.com".to_string())))
            });
        let before = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_b())
            .await;
        assert!(matches!(before.unwrap(), ListAccess::Shared));

        // After revocation: denied.
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(move |id| Ok(list_owned_by_a(id)));
        let mut share_repo = MockShareRepo::new();
        share_repo
            .expect_find_for_identity()
            .returning(|_, _| Ok(None));
        let after = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_b())
            .await;
        assert!(matches!(after.unwrap_err(), AccessError::Denied));
    }

    #[tokio::test]
    async fn ownerless_list_falls_through_to_share_lookup() {
        let list_id = Uuid::new_v4();
        let mut list_repo = MockListRepo::new();
        list_repo.expect_get_by_id().returning(move |id| {
            Ok(List::from_repository(
                id,
                "Orphan".to_string(),
                None,
                Utc::now(),
                Utc::now(),
            ))
        });
        let mut share_repo = MockShareRepo::new();
        share_repo
            .expect_find_for_identity()
            .returning(|_, _| Ok(None));

        let result = authorizer(list_repo, share_repo)
            .authorize(list_id, &identity_a())
            .await;

        assert!(matches!(result.unwrap_err(), AccessError::Denied));
    }

    #[tokio::test]
    async fn store_failure_is_surfaced_not_swallowed() {
        let mut list_repo = MockListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let share_repo = MockShareRepo::new();

        let result = authorizer(list_repo, share_repo)
            .authorize(Uuid::new_v4(), &identity_a())
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AccessError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
