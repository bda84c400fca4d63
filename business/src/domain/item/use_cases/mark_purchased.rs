use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::Identity;

pub struct MarkItemPurchasedParams {
    pub id: Uuid,
    pub identity: Identity,
    pub price: BigDecimal,
    pub quantity: BigDecimal,
    pub market_id: Option<Uuid>,
}

#[async_trait]
pub trait MarkItemPurchasedUseCase: Send + Sync {
    async fn execute(&self, params: MarkItemPurchasedParams) -> Result<Item, ItemError>;
}
