use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::access::errors::AccessError;
use crate::domain::access::model::ListAccess;
use crate::domain::shared::value_objects::Identity;

/// The single authority deciding what an identity may do with a list.
///
/// Every list-scoped operation resolves its target list (directly, or
/// through the item's parent list) and calls this before writing. There
/// is no other privilege path.
#[async_trait]
pub trait ListAccessAuthorizer: Send + Sync {
    async fn authorize(
        &self,
        list_id: Uuid,
        identity: &Identity,
    ) -> Result<ListAccess, AccessError>;
}
