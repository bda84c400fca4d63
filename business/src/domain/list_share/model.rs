use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A grant of non-owner access to a list.
///
/// `shared_principal` is the email the invite was recorded under, or a
/// stable user id once known. The invited user need not exist yet.
#[derive(Debug, Clone)]
pub struct ListShare {
    pub id: Uuid,
    pub list_id: Uuid,
    pub shared_principal: String,
    pub created_at: DateTime<Utc>,
}

impl ListShare {
    pub fn new(list_id: Uuid, shared_principal: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            list_id,
            shared_principal,
            created_at: Utc::now(),
        }
    }

    pub fn from_repository(
        id: Uuid,
        list_id: Uuid,
        shared_principal: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            shared_principal,
            created_at,
        }
    }
}
