use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::item::model::Item;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: Uuid,
    pub list_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub is_purchased: bool,
    pub price: Option<BigDecimal>,
    pub quantity: Option<BigDecimal>,
    pub market_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.list_id,
            self.name,
            self.category,
            self.notes,
            self.is_purchased,
            self.price,
            self.quantity,
            self.market_id,
            self.created_at,
            self.updated_at,
        )
    }
}
