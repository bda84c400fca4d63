use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::list::model::{ListDetail, ListWithMarkets, SharedUser};

use crate::api::item::dto::ItemResponse;
use crate::api::market::dto::MarketResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateListRequest {
    /// List name (cannot be empty)
    pub name: String,
    /// Markets to associate with the list
    #[oai(skip_serializing_if_is_none)]
    pub market_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateListRequest {
    /// New list name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Replacement market set; omitted leaves associations unchanged
    #[oai(skip_serializing_if_is_none)]
    pub market_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct ShareListRequest {
    /// Email address to invite
    pub email: String,
}

#[derive(Debug, Clone, Object)]
pub struct ListResponse {
    /// List unique identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Owner user id
    #[oai(skip_serializing_if_is_none)]
    pub owner_user_id: Option<String>,
    /// Markets associated with the list
    pub markets: Vec<MarketResponse>,
    /// Whether the caller accesses this list through a share
    pub is_shared: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<ListWithMarkets> for ListResponse {
    fn from(value: ListWithMarkets) -> Self {
        Self {
            id: value.list.id.to_string(),
            name: value.list.name,
            owner_user_id: value.list.owner_user_id.map(|o| o.as_str().to_string()),
            markets: value.markets.into_iter().map(|m| m.into()).collect(),
            is_shared: value.is_shared,
            created_at: value.list.created_at,
            updated_at: value.list.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SharedUserResponse {
    /// Principal the list is shared with (email or user id)
    pub principal: String,
    /// Display name, when the principal matches a known profile
    #[oai(skip_serializing_if_is_none)]
    pub display_name: Option<String>,
}

impl From<SharedUser> for SharedUserResponse {
    fn from(value: SharedUser) -> Self {
        Self {
            principal: value.principal,
            display_name: value.display_name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ListDetailResponse {
    /// List unique identifier
    pub id: String,
    /// List name
    pub name: String,
    /// Owner user id
    #[oai(skip_serializing_if_is_none)]
    pub owner_user_id: Option<String>,
    /// Markets associated with the list
    pub markets: Vec<MarketResponse>,
    /// Items on the list, oldest first
    pub items: Vec<ItemResponse>,
    /// Whether the caller accesses this list through a share
    pub is_shared: bool,
    /// Who the list is shared with; present only for the owner
    #[oai(skip_serializing_if_is_none)]
    pub shared_users: Option<Vec<SharedUserResponse>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<ListDetail> for ListDetailResponse {
    fn from(value: ListDetail) -> Self {
        Self {
            id: value.list.id.to_string(),
            name: value.list.name,
            owner_user_id: value.list.owner_user_id.map(|o| o.as_str().to_string()),
            markets: value.markets.into_iter().map(|m| m.into()).collect(),
            items: value.items.into_iter().map(|i| i.into()).collect(),
            is_shared: value.is_shared,
            shared_users: value
                .shared_users
                .map(|users| users.into_iter().map(|u| u.into()).collect()),
            created_at: value.list.created_at,
            updated_at: value.list.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShareResponse {
    /// List the share belongs to
    pub list_id: String,
    /// Principal the list is now shared with
    pub shared_principal: String,
}
