use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::MarketSpending;
use crate::domain::shared::value_objects::Identity;

pub struct GetSpendingByMarketParams {
    pub identity: Identity,
}

#[async_trait]
pub trait GetSpendingByMarketUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSpendingByMarketParams,
    ) -> Result<Vec<MarketSpending>, AnalyticsError>;
}
