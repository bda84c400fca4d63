use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::shared::value_objects::Identity;

pub struct GetAllListsParams {
    pub identity: Identity,
}

#[async_trait]
pub trait GetAllListsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllListsParams) -> Result<Vec<ListWithMarkets>, ListError>;
}
