pub mod asset_service;
pub mod dashboard_service;
pub mod department_service;
pub mod export_service;
pub mod maintenance_service;
pub mod user_service;
