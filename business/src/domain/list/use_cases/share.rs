use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list_share::model::ListShare;
use crate::domain::shared::value_objects::Identity;

pub struct ShareListParams {
    pub id: Uuid,
    pub identity: Identity,
    pub email: String,
}

#[async_trait]
pub trait ShareListUseCase: Send + Sync {
    async fn execute(&self, params: ShareListParams) -> Result<ListShare, ListError>;
}
