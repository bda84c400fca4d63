use crate::domain::access::errors::AccessError;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("item.name_empty")]
    NameEmpty,
    #[error("item.not_found")]
    NotFound,
    #[error("item.access_denied")]
    AccessDenied,
    #[error("item.price_not_positive")]
    NonPositivePrice,
    #[error("item.quantity_not_positive")]
    NonPositiveQuantity,
    /// A supplied market must be associated with the item's list.
    #[error("item.market_not_linked")]
    MarketNotLinked,
    /// Marking purchased requires both a price and a quantity.
    #[error("item.purchase_data_missing")]
    MissingPurchaseData,
    /// Price/quantity edits only apply to purchased items.
    #[error("item.not_purchased")]
    NotPurchased,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl From<AccessError> for ItemError {
    fn from(err: AccessError) -> Self {
        match err {
            // The parent list is gone, so the item is unreachable.
            AccessError::NotFound => ItemError::NotFound,
            AccessError::Denied => ItemError::AccessDenied,
            AccessError::Repository(e) => ItemError::Repository(e),
        }
    }
}
