use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::{DaySpending, average, weekday_name};
use crate::domain::analytics::repository::AnalyticsRepository;
use crate::domain::analytics::use_cases::by_day::{GetSpendingByDayParams, GetSpendingByDayUseCase};
use crate::domain::logger::Logger;

pub struct GetSpendingByDayUseCaseImpl {
    pub repository: Arc<dyn AnalyticsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSpendingByDayUseCase for GetSpendingByDayUseCaseImpl {
    async fn execute(
        &self,
        params: GetSpendingByDayParams,
    ) -> Result<Vec<DaySpending>, AnalyticsError> {
        self.logger.info(&format!(
            "Computing by-day spending for user {}",
            params.identity.user_id
        ));

        let rows = self.repository.purchased_by_day(&params.identity).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let avg_spent = average(&row.total_spent, row.purchase_count);
                DaySpending {
                    day_of_week: row.day_of_week,
                    day_name: weekday_name(row.day_of_week).to_string(),
                    purchase_count: row.purchase_count,
                    total_spent: row.total_spent,
                    avg_spent,
                }
            })
            .collect())
    }
}
