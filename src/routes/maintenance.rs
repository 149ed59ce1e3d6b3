use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Redirect},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::maintenance_dto::{CreateMaintenancePayload, MaintenanceFormResponse},
    error::Result,
    middleware::auth::AuthUser,
    utils::time::today,
    AppState,
};

/// Form defaults. The asset is not looked up until the form is posted.
#[axum::debug_handler(state = AppState)]
pub async fn maintenance_form(
    AuthUser(_user): AuthUser,
    Path(asset_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    Ok(Json(MaintenanceFormResponse {
        asset_id,
        date_repaired: today(),
    }))
}

#[utoipa::path(
    post,
    path = "/asset/{id}/maintain/",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    request_body = CreateMaintenancePayload,
    responses(
        (status = 303, description = "Maintenance logged, redirect to the asset list"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn create_maintenance(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(asset_id): Path<Uuid>,
    Json(payload): Json<CreateMaintenancePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let log = state
        .maintenance_service
        .create_for_asset(asset_id, payload)
        .await?;
    tracing::info!(maintenance_log_id = %log.id, logged_by = %user.username, "Maintenance recorded via form");
    Ok(Redirect::to("/list/"))
}
