use bigdecimal::BigDecimal;
use num_traits::Zero;
use uuid::Uuid;

/// Totals over in-scope purchased items: everything on lists the caller
/// owns or is shared into.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseTotals {
    pub total_spent: BigDecimal,
    pub total_items: i64,
    /// Distinct lists contributing at least one purchased item.
    pub total_lists: i64,
}

/// Raw per-weekday aggregate row. Weekdays with no purchases are not
/// present (sparse).
#[derive(Debug, Clone, PartialEq)]
pub struct DayPurchases {
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u32,
    pub purchase_count: i64,
    pub total_spent: BigDecimal,
}

/// Raw per-market aggregate row. Every market owned by the caller gets
/// a row, zero-purchase ones included.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketPurchases {
    pub market_id: Uuid,
    pub name: String,
    pub items_purchased: i64,
    pub total_spent: BigDecimal,
    /// Distinct lists contributing purchased items at this market.
    pub lists_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySpending {
    pub day_of_week: u32,
    pub day_name: String,
    pub purchase_count: i64,
    pub total_spent: BigDecimal,
    pub avg_spent: BigDecimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketSpending {
    pub market_id: Uuid,
    pub name: String,
    pub items_purchased: i64,
    pub total_spent: BigDecimal,
    pub avg_item_cost: BigDecimal,
    pub lists_count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub total_spent: BigDecimal,
    pub total_items: i64,
    pub total_lists: i64,
    pub avg_list_cost: BigDecimal,
    pub most_purchased_day: Option<String>,
    pub best_market: Option<String>,
}

pub fn weekday_name(day_of_week: u32) -> &'static str {
    match day_of_week {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        _ => "Unknown",
    }
}

/// Exact average, defined as zero when the denominator is zero so that
/// empty aggregates never produce a division error.
pub fn average(total: &BigDecimal, count: i64) -> BigDecimal {
    if count <= 0 {
        BigDecimal::zero()
    } else {
        total / BigDecimal::from(count)
    }
}
