use crate::dto::department_dto::CreateDepartmentPayload;
use crate::error::{Error, Result};
use crate::models::department::Department;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct DepartmentService {
    pool: PgPool,
}

impl DepartmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateDepartmentPayload) -> Result<Department> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(Error::BadRequest("Department name must not be blank".into()));
        }
        let department = sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(department_id = %department.id, name = %department.name, "Department created");
        Ok(department)
    }

    pub async fn list(&self) -> Result<Vec<Department>> {
        let items = sqlx::query_as::<_, Department>(
            "SELECT id, name FROM departments ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Members keep their accounts; their `department_id` is nulled by the
    /// foreign key's `ON DELETE SET NULL`.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Department not found".into()));
        }
        tracing::info!(department_id = %id, "Department deleted");
        Ok(())
    }
}
