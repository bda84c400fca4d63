use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ItemError;
use crate::domain::shared::value_objects::Identity;

pub struct DeleteItemParams {
    pub id: Uuid,
    pub identity: Identity,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
