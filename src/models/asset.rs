use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use super::timestamps::Timestamped;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Laptop,
    Monitor,
    Phone,
    Furniture,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown asset type: {0}")]
pub struct UnknownAssetType(pub String);

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Laptop,
        AssetType::Monitor,
        AssetType::Phone,
        AssetType::Furniture,
    ];

    /// Stored column value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Laptop => "LAPTOP",
            AssetType::Monitor => "MONITOR",
            AssetType::Phone => "PHONE",
            AssetType::Furniture => "FURNITURE",
        }
    }

    /// Human-readable label used in listings and exports.
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Monitor => "Monitor",
            AssetType::Phone => "Phone",
            AssetType::Furniture => "Furniture",
        }
    }
}

impl FromStr for AssetType {
    type Err = UnknownAssetType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownAssetType(s.to_string()))
    }
}

impl TryFrom<String> for AssetType {
    type Error = UnknownAssetType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: Uuid,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub asset_type: AssetType,
    pub cost: Decimal,
    pub repair_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamped for Asset {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl std::fmt::Display for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.asset_type.label())
    }
}

/// Listing row: an asset with its assignee's username and the summed cost of
/// its maintenance logs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetListRow {
    pub id: Uuid,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub asset_type: AssetType,
    pub cost: Decimal,
    pub repair_cost: Option<Decimal>,
    pub assigned_to: Option<Uuid>,
    pub assigned_username: Option<String>,
    pub repair_total: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamped for AssetListRow {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Export row: an asset with its assignee's username pre-joined.
#[derive(Debug, Clone, FromRow)]
pub struct AssetExportRow {
    pub name: String,
    #[sqlx(try_from = "String")]
    pub asset_type: AssetType,
    pub cost: Decimal,
    pub assigned_username: Option<String>,
}
