use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::service::ListAccessAuthorizer;
use crate::domain::list::errors::ListError;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::delete::{DeleteListParams, DeleteListUseCase};
use crate::domain::logger::Logger;

pub struct DeleteListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub authorizer: Arc<dyn ListAccessAuthorizer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteListUseCase for DeleteListUseCaseImpl {
    async fn execute(&self, params: DeleteListParams) -> Result<(), ListError> {
        let access = self.authorizer.authorize(params.id, &params.identity).await?;
        if !access.can_manage() {
            return Err(ListError::AccessDenied);
        }

        // Cascade order inside the repository: items, market links,
        // shares, then the list itself.
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("List {} deleted", params.id));
        Ok(())
    }
}
