use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Identity, UserId};

use super::model::List;

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn get_owned(&self, owner: &UserId) -> Result<Vec<List>, RepositoryError>;
    /// Lists shared with any of the identity's principals.
    async fn get_shared(&self, identity: &Identity) -> Result<Vec<List>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<List, RepositoryError>;
    async fn save(&self, list: &List) -> Result<(), RepositoryError>;
    /// Replaces the list's market associations with the given set.
    async fn set_markets(&self, list_id: Uuid, market_ids: &[Uuid])
    -> Result<(), RepositoryError>;
    /// Deletes the list and cascades to its items, market associations
    /// and shares, in that order.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
