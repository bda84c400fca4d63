use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::SpendingSummary;
use crate::domain::shared::value_objects::Identity;

pub struct GetSpendingSummaryParams {
    pub identity: Identity,
}

#[async_trait]
pub trait GetSpendingSummaryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSpendingSummaryParams,
    ) -> Result<SpendingSummary, AnalyticsError>;
}
