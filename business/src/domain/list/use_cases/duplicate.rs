use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::shared::value_objects::Identity;

pub struct DuplicateListParams {
    pub id: Uuid,
    pub identity: Identity,
}

#[async_trait]
pub trait DuplicateListUseCase: Send + Sync {
    async fn execute(&self, params: DuplicateListParams) -> Result<ListWithMarkets, ListError>;
}
