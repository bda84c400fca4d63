use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::shared::value_objects::Identity;

pub struct DeleteListParams {
    pub id: Uuid,
    pub identity: Identity,
}

#[async_trait]
pub trait DeleteListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteListParams) -> Result<(), ListError>;
}
