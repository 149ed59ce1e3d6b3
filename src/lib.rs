pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    asset_service::AssetService, dashboard_service::DashboardService,
    department_service::DepartmentService, maintenance_service::MaintenanceService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub asset_service: AssetService,
    pub dashboard_service: DashboardService,
    pub department_service: DepartmentService,
    pub maintenance_service: MaintenanceService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            asset_service: AssetService::new(pool.clone()),
            dashboard_service: DashboardService::new(pool.clone()),
            department_service: DepartmentService::new(pool.clone()),
            maintenance_service: MaintenanceService::new(pool.clone()),
            user_service: UserService::new(pool.clone()),
            pool,
        }
    }
}
