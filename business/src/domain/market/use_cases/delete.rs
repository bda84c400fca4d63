use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::market::errors::MarketError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteMarketParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteMarketUseCase: Send + Sync {
    async fn execute(&self, params: DeleteMarketParams) -> Result<(), MarketError>;
}
