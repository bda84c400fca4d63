use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::Identity;

/// Partial update: only supplied fields change. An empty `category` or
/// `notes` clears the field. Toggling `is_purchased` goes through the
/// same invariant as the mark/unmark operations.
pub struct UpdateItemParams {
    pub id: Uuid,
    pub identity: Identity,
    pub name: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub is_purchased: Option<bool>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<BigDecimal>,
    pub market_id: Option<Uuid>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
