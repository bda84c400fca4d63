use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Item name (cannot be empty)
    pub name: String,
    /// Optional category label
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Optional free-form notes
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateItemRequest {
    /// New item name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New category; empty string clears it
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// New notes; empty string clears them
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// Purchase flag; true requires price and quantity
    #[oai(skip_serializing_if_is_none)]
    pub is_purchased: Option<bool>,
    /// Unit price (positive)
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<BigDecimal>,
    /// Quantity bought (positive)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<BigDecimal>,
    /// Market the item was bought at
    #[oai(skip_serializing_if_is_none)]
    pub market_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct MarkItemPurchasedRequest {
    /// Unit price (must be greater than zero)
    pub price: BigDecimal,
    /// Quantity bought (must be greater than zero)
    pub quantity: BigDecimal,
    /// Market the item was bought at; must be linked to the list
    #[oai(skip_serializing_if_is_none)]
    pub market_id: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Parent list identifier
    pub list_id: String,
    /// Item name
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// Whether the item has been purchased
    pub is_purchased: bool,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<BigDecimal>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<BigDecimal>,
    #[oai(skip_serializing_if_is_none)]
    pub market_id: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp; doubles as the purchase timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            list_id: item.list_id.to_string(),
            name: item.name,
            category: item.category,
            notes: item.notes,
            is_purchased: item.is_purchased,
            price: item.price,
            quantity: item.quantity,
            market_id: item.market_id.map(|id| id.to_string()),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
