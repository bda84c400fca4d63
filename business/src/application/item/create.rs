use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        let access = self
            .authorizer
            .authorize(params.list_id, &params.identity)
            .await?;
        if !access.can_edit() {
            return Err(ItemError::AccessDenied);
        }

        self.logger.info(&format!(
            "Creating item '{}' on list {}",
            params.name, params.list_id
        ));

        let item = Item::new(params.list_id, params.name, params.category, params.notes)?;
        self.repository.save(&item).await?;

        Ok(item)
    }
}
