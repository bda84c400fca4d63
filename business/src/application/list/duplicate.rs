use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::item::repository::ItemRepository;
use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::duplicate::{DuplicateListParams, DuplicateListUseCase};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

/// Copies a list the caller can access into a fresh list the caller
/// owns: same markets, same item names/categories/notes, no purchase
/// state. The steps are sequential writes; an aborted request may leave
/// a partial copy.
pub struct DuplicateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DuplicateListUseCase for DuplicateListUseCaseImpl {
    async fn execute(&self, params: DuplicateListParams) -> Result<ListWithMarkets, ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;
        if !access.can_read() {
            return Err(ListError::AccessDenied);
        }

        let original = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                crate::domain::errors::RepositoryError::NotFound => ListError::NotFound,
                other => ListError::Repository(other),
            })?;
        let copy = original.duplicate_for(params.identity.user_id.clone());
        self.repository.save(&copy).await?;

        let markets = self.market_repository.get_by_list(original.id).await?;
        let market_ids: Vec<_> = markets.iter().map(|m| m.id).collect();
        if !market_ids.is_empty() {
            self.repository.set_markets(copy.id, &market_ids).await?;
        }

        for item in self.item_repository.get_by_list(original.id).await? {
            self.item_repository
                .save(&item.duplicate_into(copy.id))
                .await?;
        }

        self.logger
            .info(&format!("List {} duplicated as {}", original.id, copy.id));

        Ok(ListWithMarkets {
            list: copy,
            markets,
            is_shared: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::errors::AccessError;
    use crate::domain::access::model::ListAccess;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::list::model::List;
    use crate::domain::market::model::Market;
    use crate::domain::shared::value_objects::{Email, Identity, UserId};
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::sync::Mutex;
    use uuid::Uuid;

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
        pub MarketRepo {}

        #[async_trait]
        impl MarketRepository for MarketRepo {
            async fn get_all(&self, owner: &UserId) -> Result<Vec<Market>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, owner: &UserId) -> Result<Market, RepositoryError>;
            async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<Market>, RepositoryError>;
            async fn is_linked(&self, list_id: Uuid, market_id: Uuid) -> Result<bool, RepositoryError>;
            async fn save(&self, market: &Market) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, owner: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Item, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
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

    fn identity_b() -> Identity {
        Identity::new(UserId::new("user-b"), Email::new("b@example.com").unwrap())
    }

    #[tokio::test]
    async fn copies_items_without_purchase_state() {
        let saved_items: Arc<Mutex<Vec<Item>>> = Arc::new(Mutex::new(vec![]));

        let mut list_repo = MockListRepo::new();
        list_repo.expect_get_by_id().returning(|id| {
            Ok(List::from_repository(
                id,
                "Weekly".to_string(),
                Some(UserId::new("user-a")),
                Utc::now(),
                Utc::now(),
            ))
        });
        list_repo.expect_save().returning(|_| Ok(()));
        let mut market_repo = MockMarketRepo::new();
        market_repo.expect_get_by_list().returning(|_| Ok(vec![]));
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_get_by_list().returning(|list_id| {
            let mut bought = Item::new(list_id, "Rice".to_string(), None, None).unwrap();
            bought
                .mark_purchased(BigDecimal::from(10), BigDecimal::from(2), None)
                .unwrap();
            Ok(vec![bought])
        });
        let sink = saved_items.clone();
        item_repo.expect_save().returning(move |item| {
            sink.lock().unwrap().push(item.clone());
            Ok(())
        });
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Shared));

        let use_case = DuplicateListUseCaseImpl {
            repository: Arc::new(list_repo),
            market_repository: Arc::new(market_repo),
            item_repository: Arc::new(item_repo),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DuplicateListParams {
                id: Uuid::new_v4(),
                identity: identity_b(),
            })
            .await
            .unwrap();

        assert_eq!(result.list.name, "Weekly (copy)");
        assert!(result.list.is_owned_by(&UserId::new("user-b")));

        let saved = saved_items.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Rice");
        assert!(!saved[0].is_purchased);
        assert!(saved[0].price.is_none());
        assert_eq!(saved[0].list_id, result.list.id);
    }

    #[tokio::test]
    async fn denied_access_blocks_duplication() {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Err(AccessError::Denied));

        let use_case = DuplicateListUseCaseImpl {
            repository: Arc::new(MockListRepo::new()),
            market_repository: Arc::new(MockMarketRepo::new()),
            item_repository: Arc::new(MockItemRepo::new()),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DuplicateListParams {
                id: Uuid::new_v4(),
                identity: identity_b(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ListError::AccessDenied));
    }
}
