use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::shared::value_objects::Identity;

pub struct UnshareListParams {
    pub id: Uuid,
    pub identity: Identity,
    pub principal: String,
}

#[async_trait]
pub trait UnshareListUseCase: Send + Sync {
    async fn execute(&self, params: UnshareListParams) -> Result<(), ListError>;
}
