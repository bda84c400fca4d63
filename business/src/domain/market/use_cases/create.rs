use async_trait::async_trait;

use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::shared::value_objects::UserId;

pub struct CreateMarketParams {
    pub user_id: UserId,
    pub name: String,
}

#[async_trait]
pub trait CreateMarketUseCase: Send + Sync {
    async fn execute(&self, params: CreateMarketParams) -> Result<Market, MarketError>;
}
