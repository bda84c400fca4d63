use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithMarkets;
use crate::domain::shared::value_objects::Identity;

/// Partial update: only supplied fields change. Replacing the market
/// set is available to shared users as well as the owner.
pub struct UpdateListParams {
    pub id: Uuid,
    pub identity: Identity,
    pub name: Option<String>,
    pub market_ids: Option<Vec<Uuid>>,
}

#[async_trait]
pub trait UpdateListUseCase: Send + Sync {
    async fn execute(&self, params: UpdateListParams) -> Result<ListWithMarkets, ListError>;
}
