use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        let item = self
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

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Item {} deleted", params.id));
        Ok(())
    }
}
