pub mod admin;
pub mod asset;
pub mod auth;
pub mod dashboard;
pub mod docs;
pub mod export;
pub mod health;
pub mod maintenance;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::AppState;

/// All application routes. Callers attach state and layers.
pub fn router() -> Router<AppState> {
    let app_routes = Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/list/", get(asset::list_assets))
        .route("/create/", get(asset::asset_form).post(asset::create_asset))
        .route(
            "/register/",
            get(auth::registration_form).post(auth::register),
        )
        .route("/login/", post(auth::login))
        .route(
            "/asset/:id/maintain/",
            get(maintenance::maintenance_form).post(maintenance::create_maintenance),
        )
        .route("/export/csv/", get(export::export_assets_csv));

    let admin_routes = Router::new()
        .route(
            "/admin/departments/",
            get(admin::list_departments).post(admin::create_department),
        )
        .route("/admin/departments/:id/", delete(admin::delete_department))
        .route("/admin/users/", get(admin::list_users))
        .route(
            "/admin/users/:id/",
            axum::routing::patch(admin::update_user).delete(admin::delete_user),
        )
        .route(
            "/admin/assets/:id/",
            get(admin::get_asset)
                .patch(admin::update_asset)
                .delete(admin::delete_asset),
        )
        .route("/admin/maintenance-logs/", get(admin::list_maintenance_logs));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(app_routes)
        .merge(admin_routes)
}
