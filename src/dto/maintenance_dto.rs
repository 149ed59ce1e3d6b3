use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance_log::{MaintenanceLog, MaintenanceLogEntry};
use crate::utils::money;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMaintenancePayload {
    #[validate(custom(function = "super::not_blank"))]
    pub description: String,
    #[validate(custom(function = "money::validate_cost"))]
    pub cost: Decimal,
    pub date_repaired: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceLogResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub description: String,
    pub cost: Decimal,
    pub date_repaired: NaiveDate,
}

impl From<MaintenanceLog> for MaintenanceLogResponse {
    fn from(value: MaintenanceLog) -> Self {
        Self {
            id: value.id,
            asset_id: value.asset_id,
            description: value.description,
            cost: money::normalize(value.cost),
            date_repaired: value.date_repaired,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceLogEntryResponse {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub description: String,
    pub cost: Decimal,
    pub date_repaired: NaiveDate,
    pub display: String,
}

impl From<MaintenanceLogEntry> for MaintenanceLogEntryResponse {
    fn from(value: MaintenanceLogEntry) -> Self {
        let display = value.to_string();
        Self {
            id: value.id,
            asset_id: value.asset_id,
            asset_name: value.asset_name,
            description: value.description,
            cost: money::normalize(value.cost),
            date_repaired: value.date_repaired,
            display,
        }
    }
}

/// Initial values for the maintenance form of one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceFormResponse {
    pub asset_id: Uuid,
    pub date_repaired: NaiveDate,
}
