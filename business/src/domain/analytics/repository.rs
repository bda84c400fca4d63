use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Identity;

use super::model::{DayPurchases, MarketPurchases, PurchaseTotals};

/// Scoped aggregate reads over purchased items.
///
/// The scope is the set-based form of the list access rule: an item
/// counts iff it is purchased and its parent list is owned by the
/// caller or shared to one of the caller's principals. Implementations
/// must apply the identical filter to every method.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn purchase_totals(&self, identity: &Identity)
    -> Result<PurchaseTotals, RepositoryError>;
    /// Per-weekday rows grouped on the purchase timestamp; sparse.
    async fn purchased_by_day(
        &self,
        identity: &Identity,
    ) -> Result<Vec<DayPurchases>, RepositoryError>;
    /// One row per market owned by the caller, zeros included.
    async fn purchased_by_market(
        &self,
        identity: &Identity,
    ) -> Result<Vec<MarketPurchases>, RepositoryError>;
}
