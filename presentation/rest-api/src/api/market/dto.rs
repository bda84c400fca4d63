use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::market::model::Market;

#[derive(Debug, Clone, Object)]
pub struct CreateMarketRequest {
    /// Market name (cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateMarketRequest {
    /// New market name (cannot be empty)
    pub name: String,
}

#[derive(Debug, Clone, Object)]
pub struct MarketResponse {
    /// Market unique identifier
    pub id: String,
    /// Market name
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Market> for MarketResponse {
    fn from(market: Market) -> Self {
        Self {
            id: market.id.to_string(),
            name: market.name,
            created_at: market.created_at,
            updated_at: market.updated_at,
        }
    }
}
