use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::unmark_purchased::{
    UnmarkItemPurchasedParams, UnmarkItemPurchasedUseCase,
};
use crate::domain::logger::Logger;

pub struct UnmarkItemPurchasedUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UnmarkItemPurchasedUseCase for UnmarkItemPurchasedUseCaseImpl {
    async fn execute(&self, params: UnmarkItemPurchasedParams) -> Result<Item, ItemError> {
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

        item.unmark_purchased();
        self.repository.save(&item).await?;

        self.logger
            .info(&format!("Item {} unmarked purchased", item.id));
        Ok(item)
    }
}
