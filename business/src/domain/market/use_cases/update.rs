use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateMarketParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
}

#[async_trait]
pub trait UpdateMarketUseCase: Send + Sync {
    async fn execute(&self, params: UpdateMarketParams) -> Result<Market, MarketError>;
}
