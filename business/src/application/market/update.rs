use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::market::repository::MarketRepository;
use crate::domain::market::use_cases::update::{UpdateMarketParams, UpdateMarketUseCase};

pub struct UpdateMarketUseCaseImpl {
    pub repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateMarketUseCase for UpdateMarketUseCaseImpl {
    async fn execute(&self, params: UpdateMarketParams) -> Result<Market, MarketError> {
        let mut market = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MarketError::NotFound,
                other => MarketError::Repository(other),
            })?;

        market.rename(params.name)?;
        self.repository.save(&market).await?;

        self.logger.info(&format!("Market {} updated", market.id));
        Ok(market)
    }
}
