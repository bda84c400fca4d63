use bigdecimal::BigDecimal;
use poem_openapi::Object;

use business::domain::analytics::model::{DaySpending, MarketSpending, SpendingSummary};

#[derive(Debug, Clone, Object)]
pub struct SpendingSummaryResponse {
    /// Total spent across in-scope purchased items
    pub total_spent: BigDecimal,
    /// Number of purchased items in scope
    pub total_items: i64,
    /// Distinct lists with at least one purchase
    pub total_lists: i64,
    /// Average spend per contributing list; zero when there are none
    pub avg_list_cost: BigDecimal,
    /// Weekday with the most purchases, absent without purchases
    #[oai(skip_serializing_if_is_none)]
    pub most_purchased_day: Option<String>,
    /// Market with the lowest average item cost, absent without purchases
    #[oai(skip_serializing_if_is_none)]
    pub best_market: Option<String>,
}

impl From<SpendingSummary> for SpendingSummaryResponse {
    fn from(summary: SpendingSummary) -> Self {
        Self {
            total_spent: summary.total_spent,
            total_items: summary.total_items,
            total_lists: summary.total_lists,
            avg_list_cost: summary.avg_list_cost,
            most_purchased_day: summary.most_purchased_day,
            best_market: summary.best_market,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DaySpendingResponse {
    /// Weekday number, 0 = Sunday through 6 = Saturday
    pub day_of_week: u32,
    /// Weekday name
    pub day_name: String,
    /// Purchases recorded on this weekday
    pub purchase_count: i64,
    /// Total spent on this weekday
    pub total_spent: BigDecimal,
    /// Average spend per purchase
    pub avg_spent: BigDecimal,
}

impl From<DaySpending> for DaySpendingResponse {
    fn from(day: DaySpending) -> Self {
        Self {
            day_of_week: day.day_of_week,
            day_name: day.day_name,
            purchase_count: day.purchase_count,
            total_spent: day.total_spent,
            avg_spent: day.avg_spent,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MarketSpendingResponse {
    /// Market unique identifier
    pub id: String,
    /// Market name
    pub name: String,
    /// Purchased items assigned to this market
    pub items_purchased: i64,
    /// Total spent at this market
    pub total_spent: BigDecimal,
    /// Average cost per purchased item; zero without purchases
    pub avg_item_cost: BigDecimal,
    /// Distinct lists contributing purchases at this market
    pub lists_count: i64,
}

impl From<MarketSpending> for MarketSpendingResponse {
    fn from(market: MarketSpending) -> Self {
        Self {
            id: market.market_id.to_string(),
            name: market.name,
            items_purchased: market.items_purchased,
            total_spent: market.total_spent,
            avg_item_cost: market.avg_item_cost,
            lists_count: market.lists_count,
        }
    }
}
