use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::Identity;

pub struct CreateItemParams {
    pub list_id: Uuid,
    pub identity: Identity,
    pub name: String,
    pub category: Option<String>,
    pub notes: Option<String>,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
