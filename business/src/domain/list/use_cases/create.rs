use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::shared::value_objects::Identity;

pub struct CreateListParams {
    pub identity: Identity,
    pub name: String,
    pub market_ids: Vec<Uuid>,
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, params: CreateListParams) -> Result<ListWithMarkets, ListError>;
}
