use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::market::repository::MarketRepository;
use crate::domain::market::use_cases::create::{CreateMarketParams, CreateMarketUseCase};

pub struct CreateMarketUseCaseImpl {
    pub repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateMarketUseCase for CreateMarketUseCaseImpl {
    async fn execute(&self, params: CreateMarketParams) -> Result<Market, MarketError> {
        self.logger
            .info(&format!("Creating market '{}'", params.name));

        let market = Market::new(params.name, params.user_id)?;
        self.repository.save(&market).await?;

        Ok(market)
    }
}
