use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::list::model::List;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ListEntity {
    pub id: Uuid,
    pub name: String,
    pub owner_user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListEntity {
    pub fn into_domain(self) -> List {
        List::from_repository(
            self.id,
            self.name,
            self.owner_user_id.map(UserId::new),
            self.created_at,
            self.updated_at,
        )
    }
}
