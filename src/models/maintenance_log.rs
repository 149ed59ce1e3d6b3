use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub description: String,
    pub cost: Decimal,
    pub date_repaired: NaiveDate,
}

/// A log joined with the name of the asset it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceLogEntry {
    pub id: Uuid,
    pub asset_id: Uuid,
    pub asset_name: String,
    pub description: String,
    pub cost: Decimal,
    pub date_repaired: NaiveDate,
}

impl std::fmt::Display for MaintenanceLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.asset_name, self.date_repaired)
    }
}
