use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::Identity;

pub struct UnmarkItemPurchasedParams {
    pub id: Uuid,
    pub identity: Identity,
}

#[async_trait]
pub trait UnmarkItemPurchasedUseCase: Send + Sync {
    async fn execute(&self, params: UnmarkItemPurchasedParams) -> Result<Item, ItemError>;
}
