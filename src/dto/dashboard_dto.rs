use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::asset::AssetType;
use crate::services::dashboard_service::{AssetTypeCount, DashboardSummary, DepartmentCost};
use crate::utils::money;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetTypeCountResponse {
    pub asset_type: AssetType,
    pub label: String,
    pub count: i64,
}

impl From<AssetTypeCount> for AssetTypeCountResponse {
    fn from(value: AssetTypeCount) -> Self {
        Self {
            asset_type: value.asset_type,
            label: value.asset_type.label().to_string(),
            count: value.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCostResponse {
    pub department_id: Uuid,
    pub name: String,
    pub total_cost: Decimal,
}

impl From<DepartmentCost> for DepartmentCostResponse {
    fn from(value: DepartmentCost) -> Self {
        Self {
            department_id: value.id,
            name: value.name,
            total_cost: money::normalize(value.total_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_asset_value: Decimal,
    pub assets_by_type: Vec<AssetTypeCountResponse>,
    pub total_repair_cost: Decimal,
    pub department_costs: Vec<DepartmentCostResponse>,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(value: DashboardSummary) -> Self {
        Self {
            total_asset_value: money::normalize(value.total_asset_value),
            assets_by_type: value.assets_by_type.into_iter().map(Into::into).collect(),
            total_repair_cost: money::normalize(value.total_repair_cost),
            department_costs: value.department_costs.into_iter().map(Into::into).collect(),
        }
    }
}
