use crate::dto::auth_dto::RegisterPayload;
use crate::dto::user_dto::UpdateUserPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};
use sqlx::PgPool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, username, email, password_hash, department_id, is_manager, is_superuser, is_active, date_joined";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open sign-up. New accounts never carry manager or superuser rights.
    pub async fn register(&self, payload: RegisterPayload) -> Result<User> {
        if self.find_by_username(&payload.username).await?.is_some() {
            return Err(Error::BadRequest(
                "A user with that username already exists.".into(),
            ));
        }
        if let Some(department_id) = payload.department_id {
            if !self.department_exists(department_id).await? {
                return Err(Error::BadRequest("Selected department does not exist".into()));
            }
        }

        let password_hash = hash_password(&payload.password1)?;

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, email, password_hash, department_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&payload.username)
        .bind(payload.email.as_deref().map(str::trim))
        .bind(password_hash)
        .bind(payload.department_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Creates a superuser unless the username is already taken. Returns
    /// `None` when the account existed.
    pub async fn ensure_superuser(&self, username: &str, password: &str) -> Result<Option<User>> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(None);
        }
        let password_hash = hash_password(password)?;
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (username, password_hash, is_manager, is_superuser)
            VALUES ($1, $2, TRUE, TRUE)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(Some(user))
    }

    /// Checks credentials. Unknown users, wrong passwords and inactive
    /// accounts are all reported the same way.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let invalid = || Error::Unauthorized("Invalid username or password".into());
        let user = self.find_by_username(username).await?.ok_or_else(invalid)?;
        if !verify_password(password, &user.password_hash)? || !user.is_active {
            return Err(invalid());
        }
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY username ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateUserPayload) -> Result<User> {
        if let Some(Some(department_id)) = payload.department_id {
            if !self.department_exists(department_id).await? {
                return Err(Error::BadRequest("Selected department does not exist".into()));
            }
        }

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET
                is_manager = COALESCE($2, is_manager),
                is_superuser = COALESCE($3, is_superuser),
                is_active = COALESCE($4, is_active),
                department_id = CASE WHEN $5 THEN $6 ELSE department_id END
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(payload.is_manager)
        .bind(payload.is_superuser)
        .bind(payload.is_active)
        .bind(payload.department_id.is_some())
        .bind(payload.department_id.flatten())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".into()))?;

        tracing::info!(
            user_id = %user.id,
            is_manager = user.is_manager,
            is_superuser = user.is_superuser,
            is_active = user.is_active,
            "User updated"
        );
        Ok(user)
    }

    /// Assets assigned to the user become unassigned (`ON DELETE SET NULL`).
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("User not found".into()));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    async fn department_exists(&self, id: Uuid) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM departments WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
