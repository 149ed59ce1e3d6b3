use crate::error::Result;
use crate::models::asset::AssetType;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Clone)]
pub struct DashboardService {
    pool: PgPool,
}

#[derive(Debug, Clone, FromRow)]
pub struct AssetTypeCount {
    #[sqlx(try_from = "String")]
    pub asset_type: AssetType,
    pub count: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct DepartmentCost {
    pub id: Uuid,
    pub name: String,
    pub total_cost: Decimal,
}

pub struct DashboardSummary {
    pub total_asset_value: Decimal,
    pub assets_by_type: Vec<AssetTypeCount>,
    pub total_repair_cost: Decimal,
    pub department_costs: Vec<DepartmentCost>,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn summary(&self) -> Result<DashboardSummary> {
        let (total_asset_value, assets_by_type, total_repair_cost, department_costs) = tokio::try_join!(
            self.total_asset_value(),
            self.assets_by_type(),
            self.total_repair_cost(),
            self.department_costs(),
        )?;

        Ok(DashboardSummary {
            total_asset_value,
            assets_by_type,
            total_repair_cost,
            department_costs,
        })
    }

    pub async fn total_asset_value(&self) -> Result<Decimal> {
        let total = sqlx::query_scalar::<_, Decimal>("SELECT COALESCE(SUM(cost), 0) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Only types with at least one asset are returned.
    pub async fn assets_by_type(&self) -> Result<Vec<AssetTypeCount>> {
        let rows = sqlx::query_as::<_, AssetTypeCount>(
            r#"
            SELECT asset_type, COUNT(*) AS count
            FROM assets
            GROUP BY asset_type
            ORDER BY asset_type
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn total_repair_cost(&self) -> Result<Decimal> {
        let total =
            sqlx::query_scalar::<_, Decimal>("SELECT COALESCE(SUM(cost), 0) FROM maintenance_logs")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }

    /// Every department with the summed cost of assets assigned to its members.
    /// Departments without such assets report zero.
    pub async fn department_costs(&self) -> Result<Vec<DepartmentCost>> {
        let rows = sqlx::query_as::<_, DepartmentCost>(
            r#"
            SELECT d.id, d.name, COALESCE(SUM(a.cost), 0) AS total_cost
            FROM departments d
            LEFT JOIN users u ON u.department_id = d.id
            LEFT JOIN assets a ON a.assigned_to = u.id
            GROUP BY d.id, d.name
            ORDER BY d.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
