use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::list_share::model::ListShare;

#[derive(Debug, FromRow)]
pub struct ListShareEntity {
    pub id: Uuid,
    pub list_id: Uuid,
    pub shared_principal: String,
    pub created_at: DateTime<Utc>,
}

impl ListShareEntity {
    pub fn into_domain(self) -> ListShare {
        ListShare::from_repository(self.id, self.list_id, self.shared_principal, self.created_at)
    }
}
