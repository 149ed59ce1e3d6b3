use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub department_id: Option<Uuid>,
    pub is_manager: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Role name carried in access tokens. Informational only: access checks
    /// always use the flags re-read from the database.
    pub fn role(&self) -> &'static str {
        if self.is_superuser {
            "superuser"
        } else if self.is_manager {
            "manager"
        } else {
            "staff"
        }
    }
}
