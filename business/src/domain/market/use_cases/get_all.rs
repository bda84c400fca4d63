use async_trait::async_trait;

use crate::domain::market::errors::MarketError;
use crate::domain::market::model::Market;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllMarketsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllMarketsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllMarketsParams) -> Result<Vec<Market>, MarketError>;
}
