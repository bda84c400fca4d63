use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Market;

#[async_trait]
pub trait MarketRepository: Send + Sync {
    async fn get_all(&self, owner: &UserId) -> Result<Vec<Market>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, owner: &UserId) -> Result<Market, RepositoryError>;
    /// Markets associated with a list, whoever owns them.
    async fn get_by_list(&self, list_id: Uuid) -> Result<Vec<Market>, RepositoryError>;
    /// Whether the market is associated with the list.
    async fn is_linked(&self, list_id: Uuid, market_id: Uuid) -> Result<bool, RepositoryError>;
    async fn save(&self, market: &Market) -> Result<(), RepositoryError>;
    /// Deletes the market, removing its list associations and clearing
    /// `market_id` on items first (items survive).
    async fn delete(&self, id: Uuid, owner: &UserId) -> Result<(), RepositoryError>;
}
