use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::mark_purchased::{
    MarkItemPurchasedParams, MarkItemPurchasedUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::market::repository::MarketRepository;

pub struct MarkItemPurchasedUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub market_repository: Arc<dyn MarketRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkItemPurchasedUseCase for MarkItemPurchasedUseCaseImpl {
    async fn execute(&self, params: MarkItemPurchasedParams) -> Result<Item, ItemError> {
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

        // The market, if given, must be one of the list's markets.
        if let Some(market_id) = params.market_id
            && !self
                .market_repository
                .is_linked(item.list_id, market_id)
                .await?
        {
            return Err(ItemError::MarketNotLinked);
        }

        item.mark_purchased(params.price, params.quantity, params.market_id)?;
        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Item {} marked purchased", item.id));
        Ok(item)
    }
}
