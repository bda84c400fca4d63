use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

use super::errors::MarketError;

#[derive(Debug, Clone)]
pub struct Market {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Market {
    pub fn new(name: String, owner: UserId) -> Result<Self, MarketError> {
        if name.trim().is_empty() {
            return Err(MarketError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            owner_user_id: owner,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        owner_user_id: UserId,
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

    pub fn rename(&mut self, name: String) -> Result<(), MarketError> {
        if name.trim().is_empty() {
            return Err(MarketError::NameEmpty);
        }
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }
}
