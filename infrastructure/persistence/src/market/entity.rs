use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::market::model::Market;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct MarketEntity {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MarketEntity {
    pub fn into_domain(self) -> Market {
        Market::from_repository(
            self.id,
            self.name,
            UserId::new(self.owner_user_id),
            self.created_at,
            self.updated_at,
        )
    }
}
