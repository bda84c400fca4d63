use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::analytics::errors::AnalyticsError;
use crate::domain::analytics::model::{
    DayPurchases, MarketPurchases, SpendingSummary, average, weekday_name,
};
use crate::domain::analytics::repository::AnalyticsRepository;
use crate::domain::analytics::use_cases::summary::{
    GetSpendingSummaryParams, GetSpendingSummaryUseCase,
};
use crate::domain::logger::Logger;

/// Builds the summary from the same by-day and by-market primitives the
/// dedicated endpoints use, so all three share one scope filter and one
/// aggregation path.
pub struct GetSpendingSummaryUseCaseImpl {
    pub repository: Arc<dyn AnalyticsRepository>,
    pub logger: Arc<dyn Logger>,
}

/// First day with the strictly highest purchase count; tie order is
/// whatever the row ordering yields first.
fn most_purchased_day(days: &[DayPurchases]) -> Option<String> {
    days.iter()
        .reduce(|best, day| {
            if day.purchase_count > best.purchase_count {
                day
            } else {
                best
            }
        })
        .map(|day| weekday_name(day.day_of_week).to_string())
}

/// Market with the lowest average per-item cost among markets with at
/// least one purchase; ties resolve to the first row encountered.
fn best_market(markets: &[MarketPurchases]) -> Option<String> {
    let mut best: Option<(&MarketPurchases, BigDecimal)> = None;
    for market in markets.iter().filter(|m| m.items_purchased > 0) {
        let avg = average(&market.total_spent, market.items_purchased);
        match &best {
            Some((_, best_avg)) if avg >= *best_avg => {}
            _ => best = Some((market, avg)),
        }
    }
    best.map(|(market, _)| market.name.clone())
}

#[async_trait]
impl GetSpendingSummaryUseCase for GetSpendingSummaryUseCaseImpl {
    async fn execute(
        &self,
        params: GetSpendingSummaryParams,
    ) -> Result<SpendingSummary, AnalyticsError> {
        self.logger.info(&format!(
            "Computing spending summary for user {}",
            params.identity.user_id
        ));

        let totals = self.repository.purchase_totals(&params.identity).await?;
        let days = self.repository.purchased_by_day(&params.identity).await?;
        let markets = self.repository.purchased_by_market(&params.identity).await?;

        let avg_list_cost = average(&totals.total_spent, totals.total_lists);

        Ok(SpendingSummary {
            most_purchased_day: most_purchased_day(&days),
            best_market: best_market(&markets),
            total_spent: totals.total_spent,
            total_items: totals.total_items,
            total_lists: totals.total_lists,
            avg_list_cost,
        })
    }
}
