use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::maintenance_dto::MaintenanceLogResponse;
use super::user_dto::UserChoice;
use crate::models::asset::{Asset, AssetListRow, AssetType};
use crate::models::timestamps::Timestamps;
use crate::services::asset_service::AssetPage;
use crate::utils::money;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAssetPayload {
    #[validate(length(min = 1, max = 100), custom(function = "super::not_blank"))]
    pub name: String,
    pub asset_type: AssetType,
    #[validate(custom(function = "money::validate_cost"))]
    pub cost: Decimal,
    #[validate(custom(function = "money::validate_repair_cost"))]
    pub repair_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
}

/// Partial update. `repair_cost` and `assigned_to` may be set to `null` to clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_update_amounts"))]
pub struct UpdateAssetPayload {
    #[validate(length(min = 1, max = 100), custom(function = "super::not_blank"))]
    pub name: Option<String>,
    pub asset_type: Option<AssetType>,
    pub cost: Option<Decimal>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub repair_cost: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub assigned_to: Option<Option<Uuid>>,
}

fn validate_update_amounts(payload: &UpdateAssetPayload) -> Result<(), ValidationError> {
    if let Some(cost) = &payload.cost {
        money::validate_cost(cost)?;
    }
    if let Some(Some(repair_cost)) = &payload.repair_cost {
        money::validate_repair_cost(repair_cost)?;
    }
    Ok(())
}

impl UpdateAssetPayload {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.asset_type.is_none()
            && self.cost.is_none()
            && self.repair_cost.is_none()
            && self.assigned_to.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetResponse {
    pub id: Uuid,
    pub name: String,
    pub asset_type: AssetType,
    pub asset_type_label: String,
    pub cost: Decimal,
    pub repair_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
    pub display: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<Asset> for AssetResponse {
    fn from(value: Asset) -> Self {
        let display = value.to_string();
        let timestamps = Timestamps::of(&value);
        Self {
            id: value.id,
            name: value.name,
            asset_type: value.asset_type,
            asset_type_label: value.asset_type.label().to_string(),
            cost: money::normalize(value.cost),
            repair_cost: value.repair_cost.map(money::normalize),
            assigned_to: value.assigned_to,
            display,
            timestamps,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetListItem {
    pub id: Uuid,
    pub name: String,
    pub asset_type: AssetType,
    pub asset_type_label: String,
    pub cost: Decimal,
    pub repair_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
    pub assigned_username: Option<String>,
    pub repair_total: Decimal,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl From<AssetListRow> for AssetListItem {
    fn from(value: AssetListRow) -> Self {
        let timestamps = Timestamps::of(&value);
        Self {
            id: value.id,
            name: value.name,
            asset_type: value.asset_type,
            asset_type_label: value.asset_type.label().to_string(),
            cost: money::normalize(value.cost),
            repair_cost: value.repair_cost.map(money::normalize),
            assigned_to: value.assigned_to,
            assigned_username: value.assigned_username,
            repair_total: money::normalize(value.repair_total),
            timestamps,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssetListQuery {
    /// A page number or `last`.
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetListResponse {
    pub items: Vec<AssetListItem>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<AssetPage> for AssetListResponse {
    fn from(value: AssetPage) -> Self {
        let has_next = value.has_next();
        let has_previous = value.has_previous();
        Self {
            items: value.items.into_iter().map(Into::into).collect(),
            total: value.total,
            page: value.page,
            per_page: value.per_page,
            total_pages: value.total_pages,
            has_next,
            has_previous,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTypeChoice {
    pub value: AssetType,
    pub label: String,
}

impl From<AssetType> for AssetTypeChoice {
    fn from(value: AssetType) -> Self {
        Self {
            value,
            label: value.label().to_string(),
        }
    }
}

/// Choice data for the asset creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetFormResponse {
    pub asset_types: Vec<AssetTypeChoice>,
    pub users: Vec<UserChoice>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDetailResponse {
    #[serde(flatten)]
    pub asset: AssetResponse,
    pub maintenance_logs: Vec<MaintenanceLogResponse>,
}
