use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::department::Department;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Department> for DepartmentResponse {
    fn from(value: Department) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}
