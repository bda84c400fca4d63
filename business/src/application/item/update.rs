use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        let mut item = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        let access = self
            .authorizer
            .authorize(item.list_id, &params.identity)
            .await?;
        if !access.can_edit() {
            return Err(ItemError::AccessDenied);
        }

        if let Some(name) = params.name {
            item.rename(name)?;
        }
        if let Some(category) = params.category {
            item.category = (!category.trim().is_empty()).then_some(category);
        }
        if let Some(notes) = params.notes {
            item.notes = (!notes.trim().is_empty()).then_some(notes);
        }
        if let Some(market_id) = params.market_id {
            if !self
                .market_repository
                .is_linked(item.list_id, market_id)
                .await?
            {
                return Err(ItemError::MarketNotLinked);
            }
            item.market_id = Some(market_id);
        }

        match params.is_purchased {
            Some(true) => {
                let price = params
                    .price
                    .or_else(|| item.price.clone())
                    .ok_or(ItemError::MissingPurchaseData)?;
                let quantity = params
                    .quantity
                    .or_else(|| item.quantity.clone())
                    .ok_or(ItemError::MissingPurchaseData)?;
                let market_id = item.market_id;
                item.mark_purchased(price, quantity, market_id)?;
            }
            Some(false) => {
                if params.price.is_some() || params.quantity.is_some() {
                    return Err(ItemError::NotPurchased);
                }
                item.unmark_purchased();
            }
            None => {
                if params.price.is_some() || params.quantity.is_some() {
                    if !item.is_purchased {
                        return Err(ItemError::NotPurchased);
                    }
                    let price = params
                        .price
                        .or_else(|| item.price.clone())
                        .ok_or(ItemError::MissingPurchaseData)?;
                    let quantity = params
                        .quantity
                        .or_else(|| item.quantity.clone())
                        .ok_or(ItemError::MissingPurchaseData)?;
                    let market_id = item.market_id;
                    item.mark_purchased(price, quantity, market_id)?;
                }
            }
        }

        item.updated_at = Utc::now();
        self.repository.save(&item).await?;

        self.logger.info(&format!("Item {} updated", item.id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::errors::AccessError;
    use crate::domain::access::model::ListAccess;
    use crate::domain::market::model::Market;
    use crate::domain::shared::value_objects::{Email, Identity, UserId};
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use uuid::Uuid;

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

    fn test_identity() -> Identity {
        Identity::new(UserId::new("user-a"), Email::new("a@example.com").unwrap())
    }

    fn unpurchased_item(id: Uuid) -> Item {
        Item::from_repository(
            id,
            Uuid::new_v4(),
            "Rice".to_string(),
            None,
            None,
            false,
            None,
            None,
            None,
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    fn purchased_item(id: Uuid) -> Item {
        Item::from_repository(
            id,
            Uuid::new_v4(),
            "Rice".to_string(),
            None,
            None,
            true,
            Some(BigDecimal::from(10)),
            Some(BigDecimal::from(2)),
            None,
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    fn no_op_params(id: Uuid) -> UpdateItemParams {
        UpdateItemParams {
            id,
            identity: test_identity(),
            name: None,
            category: None,
            notes: None,
            is_purchased: None,
            price: None,
            quantity: None,
            market_id: None,
        }
    }

    fn use_case(
        repo: MockItemRepo,
        market_repo: MockMarketRepo,
        authorizer: MockAuthorizer,
    ) -> UpdateItemUseCaseImpl {
        UpdateItemUseCaseImpl {
            repository: Arc::new(repo),
            market_repository: Arc::new(market_repo),
            authorizer: Arc::new(authorizer),
            logger: mock_logger(),
        }
    }

    fn allowing_authorizer() -> MockAuthorizer {
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Ok(ListAccess::Shared));
        authorizer
    }

    #[tokio::test]
    async fn updates_only_supplied_fields() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(unpurchased_item(id)));
        repo.expect_save().returning(|_| Ok(()));

        let item = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                name: Some("Brown rice".to_string()),
                notes: Some("1kg bag".to_string()),
                ..no_op_params(Uuid::new_v4())
            })
            .await
            .unwrap();

        assert_eq!(item.name, "Brown rice");
        assert_eq!(item.notes.as_deref(), Some("1kg bag"));
        assert!(item.category.is_none());
        assert!(!item.is_purchased);
    }

    #[tokio::test]
    async fn empty_category_clears_the_field() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id().returning(move |id| {
            let mut item = unpurchased_item(id);
            item.category = Some("Grains".to_string());
            Ok(item)
        });
        repo.expect_save().returning(|_| Ok(()));

        let item = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                category: Some("".to_string()),
                ..no_op_params(Uuid::new_v4())
            })
            .await
            .unwrap();

        assert!(item.category.is_none());
    }

    #[tokio::test]
    async fn marking_purchased_through_update_requires_price_and_quantity() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(unpurchased_item(id)));

        let result = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                is_purchased: Some(true),
                ..no_op_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::MissingPurchaseData
        ));
    }

    #[tokio::test]
    async fn unpurchasing_through_update_clears_purchase_fields() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(purchased_item(id)));
        repo.expect_save().returning(|_| Ok(()));

        let item = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                is_purchased: Some(false),
                ..no_op_params(Uuid::new_v4())
            })
            .await
            .unwrap();

        assert!(!item.is_purchased);
        assert!(item.price.is_none());
        assert!(item.quantity.is_none());
        assert!(item.market_id.is_none());
    }

    #[tokio::test]
    async fn price_edit_on_unpurchased_item_is_rejected() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(unpurchased_item(id)));

        let result = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                price: Some(BigDecimal::from(5)),
                ..no_op_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotPurchased));
    }

    #[tokio::test]
    async fn price_edit_on_purchased_item_revalidates_positivity() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(purchased_item(id)));

        let result = use_case(repo, MockMarketRepo::new(), allowing_authorizer())
            .execute(UpdateItemParams {
                price: Some(BigDecimal::from(-3)),
                ..no_op_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NonPositivePrice));
    }

    #[tokio::test]
    async fn market_must_be_linked_to_the_list() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(unpurchased_item(id)));
        let mut market_repo = MockMarketRepo::new();
        market_repo.expect_is_linked().returning(|_, _| Ok(false));

        let result = use_case(repo, market_repo, allowing_authorizer())
            .execute(UpdateItemParams {
                market_id: Some(Uuid::new_v4()),
                ..no_op_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::MarketNotLinked));
    }

    #[tokio::test]
    async fn denied_access_blocks_the_update() {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(move |id| Ok(unpurchased_item(id)));
        let mut authorizer = MockAuthorizer::new();
        authorizer
            .expect_authorize()
            .returning(|_, _| Err(AccessError::Denied));

        let result = use_case(repo, MockMarketRepo::new(), authorizer)
            .execute(UpdateItemParams {
                name: Some("New".to_string()),
                ..no_op_params(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::AccessDenied));
    }
}
