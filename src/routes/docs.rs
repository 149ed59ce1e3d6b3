use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Asset Tracker API"),
    paths(
        crate::routes::dashboard::dashboard,
        crate::routes::asset::list_assets,
        crate::routes::asset::create_asset,
        crate::routes::maintenance::create_maintenance,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::admin::create_department,
        crate::routes::admin::delete_department,
        crate::routes::admin::update_user,
        crate::routes::admin::delete_user,
        crate::routes::admin::get_asset,
        crate::routes::admin::update_asset,
        crate::routes::admin::delete_asset,
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
