use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::item::model::Item;
use crate::domain::market::model::Market;
use crate::domain::shared::value_objects::UserId;

use super::errors::ListError;

#[derive(Debug, Clone)]
pub struct List {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    pub fn new(name: String, owner: UserId) -> Result<Self, ListError> {
        if name.trim().is_empty() {
            return Err(ListError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            owner_user_id: Some(owner),
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        owner_user_id: Option<UserId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_user_id,
            created_at,
            updated_at,
        }
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.owner_user_id.as_ref() == Some(user_id)
    }

    pub fn rename(&mut self, name: String) -> Result<(), ListError> {
        if name.trim().is_empty() {
            return Err(ListError::NameEmpty);
        }
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// A fresh copy of this list for `new_owner`, name suffixed to mark
    /// it as a duplicate. Items and market links are copied separately.
    pub fn duplicate_for(&self, new_owner: UserId) -> List {
        let now = Utc::now();
        List {
            id: Uuid::new_v4(),
            name: format!("{} (copy)", self.name),
            owner_user_id: Some(new_owner),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A list annotated for the overview endpoint.
#[derive(Debug, Clone)]
pub struct ListWithMarkets {
    pub list: List,
    pub markets: Vec<Market>,
    pub is_shared: bool,
}

/// Principal a list is shared with, resolved against user profiles
/// when the principal matches a known user id.
#[derive(Debug, Clone)]
pub struct SharedUser {
    pub principal: String,
    pub display_name: Option<String>,
}

/// Full list detail. `shared_users` is only populated for the owner.
#[derive(Debug, Clone)]
pub struct ListDetail {
    pub list: List,
    pub markets: Vec<Market>,
    pub items: Vec<Item>,
    pub is_shared: bool,
    pub shared_users: Option<Vec<SharedUser>>,
}
