use crate::dto::maintenance_dto::CreateMaintenancePayload;
use crate::error::{Error, Result};
use crate::models::maintenance_log::{MaintenanceLog, MaintenanceLogEntry};
use crate::utils::time::today;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct MaintenanceService {
    pool: PgPool,
}

impl MaintenanceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records a repair against `asset_id`. The asset reference comes only from
    /// the caller, never from the payload; a missing asset is `NotFound`.
    pub async fn create_for_asset(
        &self,
        asset_id: Uuid,
        payload: CreateMaintenancePayload,
    ) -> Result<MaintenanceLog> {
        let date_repaired = payload.date_repaired.unwrap_or_else(today);

        // Insert-select keeps the existence check and the write in one statement.
        let log = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs (asset_id, description, cost, date_repaired)
            SELECT a.id, $2, $3, $4
            FROM assets a
            WHERE a.id = $1
            RETURNING id, asset_id, description, cost, date_repaired
            "#,
        )
        .bind(asset_id)
        .bind(payload.description.trim())
        .bind(payload.cost)
        .bind(date_repaired)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Asset not found".into()))?;

        tracing::info!(
            maintenance_log_id = %log.id,
            asset_id = %asset_id,
            cost = %log.cost,
            "Maintenance logged"
        );
        Ok(log)
    }

    pub async fn list_for_asset(&self, asset_id: Uuid) -> Result<Vec<MaintenanceLog>> {
        let logs = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            SELECT id, asset_id, description, cost, date_repaired
            FROM maintenance_logs
            WHERE asset_id = $1
            ORDER BY date_repaired DESC, id
            "#,
        )
        .bind(asset_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }

    pub async fn list_all(&self) -> Result<Vec<MaintenanceLogEntry>> {
        let logs = sqlx::query_as::<_, MaintenanceLogEntry>(
            r#"
            SELECT m.id, m.asset_id, a.name AS asset_name, m.description, m.cost, m.date_repaired
            FROM maintenance_logs m
            JOIN assets a ON a.id = m.asset_id
            ORDER BY m.date_repaired DESC, a.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(logs)
    }
}
