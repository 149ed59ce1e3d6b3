use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub department_id: Option<Uuid>,
    pub is_manager: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
            department_id: value.department_id,
            is_manager: value.is_manager,
            is_superuser: value.is_superuser,
            is_active: value.is_active,
            date_joined: value.date_joined,
        }
    }
}

/// Minimal user reference for form choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserChoice {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserChoice {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserPayload {
    pub is_manager: Option<bool>,
    pub is_superuser: Option<bool>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub department_id: Option<Option<Uuid>>,
}
