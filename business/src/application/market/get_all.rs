use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::market::repository::MarketRepository;
use crate::domain::market::use_cases::get_all::{GetAllMarketsParams, GetAllMarketsUseCase};

pub struct GetAllMarketsUseCaseImpl {
    pub repository: Arc<dyn MarketRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllMarketsUseCase for GetAllMarketsUseCaseImpl {
    async fn execute(&self, params: GetAllMarketsParams) -> Result<Vec<Market>, MarketError> {
        self.logger
            .debug(&format!("Fetching markets for user {}", params.user_id));

        Ok(self.repository.get_all(&params.user_id).await?)
    }
}
