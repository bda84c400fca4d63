use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::DaySpending;
use crate::domain::shared::value_objects::Identity;

pub struct GetSpendingByDayParams {
    pub identity: Identity,
}

#[async_trait]
pub trait GetSpendingByDayUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSpendingByDayParams,
    ) -> Result<Vec<DaySpending>, AnalyticsError>;
}
