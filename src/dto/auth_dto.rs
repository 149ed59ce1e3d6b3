use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::department_dto::DepartmentResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "passwords_match"))]
pub struct RegisterPayload {
    #[validate(length(min = 1, max = 150), custom(function = "validate_username"))]
    pub username: String,
    #[serde(default, deserialize_with = "super::blank_as_none")]
    #[validate(email)]
    pub email: Option<String>,
    pub department_id: Option<Uuid>,
    #[validate(length(min = 8))]
    pub password1: String,
    pub password2: String,
}

/// Letters, digits and `@ . + - _` only.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("username_chars");
        err.message = Some(Cow::Borrowed(
            "Username may contain only letters, numbers, and @/./+/-/_ characters",
        ));
        Err(err)
    }
}

fn passwords_match(payload: &RegisterPayload) -> Result<(), ValidationError> {
    if payload.password1 == payload.password2 {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_mismatch");
        err.message = Some(Cow::Borrowed("The two password fields didn't match"));
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationFormResponse {
    pub departments: Vec<DepartmentResponse>,
}
