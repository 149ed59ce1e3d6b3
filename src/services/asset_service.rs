use crate::dto::asset_dto::{CreateAssetPayload, UpdateAssetPayload};
use crate::error::{Error, Result};
use crate::models::asset::{Asset, AssetExportRow, AssetListRow};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

pub const ASSETS_PER_PAGE: i64 = 5;

const ASSET_COLUMNS: &str =
    "id, name, asset_type, cost, repair_cost, assigned_to, created_at, updated_at";

#[derive(Clone)]
pub struct AssetService {
    pool: PgPool,
}

pub struct AssetPage {
    pub items: Vec<AssetListRow>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
}

impl AssetPage {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest::Number(1)
    }
}

impl FromStr for PageRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "last" {
            return Ok(PageRequest::Last);
        }
        s.trim()
            .parse::<i64>()
            .map(PageRequest::Number)
            .map_err(|_| Error::NotFound("Page is not 'last', nor can it be converted to an int.".into()))
    }
}

/// Number of pages for `total` rows. An empty table still has one (empty) page.
pub fn page_count(total: i64, per_page: i64) -> i64 {
    ((total + per_page - 1) / per_page).max(1)
}

impl AssetService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateAssetPayload) -> Result<Asset> {
        if let Some(user_id) = payload.assigned_to {
            self.ensure_user_exists(user_id).await?;
        }

        let asset = sqlx::query_as::<_, Asset>(&format!(
            r#"
            INSERT INTO assets (name, asset_type, cost, repair_cost, assigned_to)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ASSET_COLUMNS}
            "#
        ))
        .bind(payload.name.trim())
        .bind(payload.asset_type.as_str())
        .bind(payload.cost)
        .bind(payload.repair_cost)
        .bind(payload.assigned_to)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(asset_id = %asset.id, asset = %asset, cost = %asset.cost, "Asset created");
        Ok(asset)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Asset> {
        let asset = sqlx::query_as::<_, Asset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Asset not found".into()))?;
        Ok(asset)
    }

    /// One page of assets, newest first, each with its summed maintenance cost.
    pub async fn list_page(&self, request: PageRequest) -> Result<AssetPage> {
        let per_page = ASSETS_PER_PAGE;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        let total_pages = page_count(total, per_page);
        let page = match request {
            PageRequest::Number(n) => n,
            PageRequest::Last => total_pages,
        };
        if page < 1 || page > total_pages {
            return Err(Error::NotFound(format!("Invalid page ({})", page)));
        }
        let offset = (page - 1) * per_page;

        let items = sqlx::query_as::<_, AssetListRow>(
            r#"
            SELECT
                a.id,
                a.name,
                a.asset_type,
                a.cost,
                a.repair_cost,
                a.assigned_to,
                u.username AS assigned_username,
                COALESCE(
                    (SELECT SUM(m.cost) FROM maintenance_logs m WHERE m.asset_id = a.id),
                    0
                ) AS repair_total,
                a.created_at,
                a.updated_at
            FROM assets a
            LEFT JOIN users u ON u.id = a.assigned_to
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(AssetPage {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Every asset with its assignee's username, oldest first. Unpaginated.
    pub async fn list_for_export(&self) -> Result<Vec<AssetExportRow>> {
        let rows = sqlx::query_as::<_, AssetExportRow>(
            r#"
            SELECT a.name, a.asset_type, a.cost, u.username AS assigned_username
            FROM assets a
            LEFT JOIN users u ON u.id = a.assigned_to
            ORDER BY a.created_at ASC, a.id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateAssetPayload) -> Result<Asset> {
        if payload.is_empty() {
            return self.get_by_id(id).await;
        }
        if let Some(Some(user_id)) = payload.assigned_to {
            self.ensure_user_exists(user_id).await?;
        }

        let asset = sqlx::query_as::<_, Asset>(&format!(
            r#"
            UPDATE assets
            SET
                name = COALESCE($2, name),
                asset_type = COALESCE($3, asset_type),
                cost = COALESCE($4, cost),
                repair_cost = CASE WHEN $5 THEN $6 ELSE repair_cost END,
                assigned_to = CASE WHEN $7 THEN $8 ELSE assigned_to END
            WHERE id = $1
            RETURNING {ASSET_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(payload.name.as_deref().map(str::trim))
        .bind(payload.asset_type.map(|t| t.as_str()))
        .bind(payload.cost)
        .bind(payload.repair_cost.is_some())
        .bind(payload.repair_cost.flatten())
        .bind(payload.assigned_to.is_some())
        .bind(payload.assigned_to.flatten())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Asset not found".into()))?;

        tracing::info!(asset_id = %asset.id, "Asset updated");
        Ok(asset)
    }

    /// Maintenance logs of the asset go with it (`ON DELETE CASCADE`).
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Asset not found".into()));
        }
        tracing::info!(asset_id = %id, "Asset deleted");
        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: Uuid) -> Result<()> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        if !exists {
            return Err(Error::BadRequest("Assigned user does not exist".into()));
        }
        Ok(())
    }
}
