use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::market::errors::MarketError;
use crate::domain::market::repository::MarketRepository;
use crate::domain::market::use_cases::delete::{DeleteMarketParams, DeleteMarketUseCase};

pub struct DeleteMarketUseCaseImpl {
    pub repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteMarketUseCase for DeleteMarketUseCaseImpl {
    async fn execute(&self, params: DeleteMarketParams) -> Result<(), MarketError> {
        // Ownership check up front; the cascade must not run against
        // somebody else's market.
        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MarketError::NotFound,
                other => MarketError::Repository(other),
            })?;

        self.repository.delete(params.id, &params.user_id).await?;

        self.logger.info(&format!("Market {} deleted", params.id));
        Ok(())
    }
}
