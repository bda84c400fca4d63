use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListDetail;
use crate::domain::shared::value_objects::Identity;

pub struct GetListByIdParams {
    pub id: Uuid,
    pub identity: Identity,
}

#[async_trait]
pub trait GetListByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetListByIdParams) -> Result<ListDetail, ListError>;
}
