use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Identity;

use super::model::ListShare;

#[async_trait]
pub trait ListShareRepository: Send + Sync {
    /// The share granting this identity access to the list, if any.
    /// Matches against every principal of the identity (user id or
    /// invited email).
    async fn find_for_identity(
        &self,
        list_id: Uuid,
        identity: &Identity,
    ) -> Result<Option<ListShare>, RepositoryError>;
    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<ListShare>, RepositoryError>;
    async fn exists(&self, list_id: Uuid, principal: &str) -> Result<bool, RepositoryError>;
    async fn save(&self, share: &ListShare) -> Result<(), RepositoryError>;
    async fn delete(&self, list_id: Uuid, principal: &str) -> Result<(), RepositoryError>;
}
