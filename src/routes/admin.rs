//! Superuser-only administration of departments, users, assets and logs.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        asset_dto::{AssetDetailResponse, AssetResponse, UpdateAssetPayload},
        department_dto::{CreateDepartmentPayload, DepartmentResponse},
        maintenance_dto::{MaintenanceLogEntryResponse, MaintenanceLogResponse},
        user_dto::{UpdateUserPayload, UserResponse},
    },
    error::{Error, Result},
    middleware::auth::{Require, Superuser},
    AppState,
};

#[axum::debug_handler]
pub async fn list_departments(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
) -> Result<impl IntoResponse> {
    let items = state.department_service.list().await?;
    let items: Vec<DepartmentResponse> = items.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/admin/departments/",
    request_body = CreateDepartmentPayload,
    responses(
        (status = 201, description = "Department created", body = Json<DepartmentResponse>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 403, description = "Superuser access required")
    )
)]
#[axum::debug_handler]
pub async fn create_department(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
    Json(payload): Json<CreateDepartmentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let department = state.department_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(DepartmentResponse::from(department))))
}

#[utoipa::path(
    delete,
    path = "/admin/departments/{id}/",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted, members keep their accounts"),
        (status = 404, description = "Department not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_department(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.department_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    let users: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(users))
}

#[utoipa::path(
    patch,
    path = "/admin/users/{id}/",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = Json<UserResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    admin: Require<Superuser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if admin.user().id == id && payload.is_superuser == Some(false) {
        return Err(Error::BadRequest(
            "Superusers cannot revoke their own superuser status".into(),
        ));
    }
    let user = state.user_service.update(id, payload).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/admin/users/{id}/",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted, their assets become unassigned"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    admin: Require<Superuser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    if admin.user().id == id {
        return Err(Error::BadRequest("Superusers cannot delete themselves".into()));
    }
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/assets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset with its maintenance history", body = Json<AssetDetailResponse>),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn get_asset(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let asset = state.asset_service.get_by_id(id).await?;
    let logs = state.maintenance_service.list_for_asset(id).await?;
    Ok(Json(AssetDetailResponse {
        asset: AssetResponse::from(asset),
        maintenance_logs: logs.into_iter().map(MaintenanceLogResponse::from).collect(),
    }))
}

#[utoipa::path(
    patch,
    path = "/admin/assets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    request_body = UpdateAssetPayload,
    responses(
        (status = 200, description = "Asset updated", body = Json<AssetResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn update_asset(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssetPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let asset = state.asset_service.update(id, payload).await?;
    Ok(Json(AssetResponse::from(asset)))
}

#[utoipa::path(
    delete,
    path = "/admin/assets/{id}/",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset and its maintenance logs deleted"),
        (status = 404, description = "Asset not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_asset(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.asset_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn list_maintenance_logs(
    State(state): State<AppState>,
    _admin: Require<Superuser>,
) -> Result<impl IntoResponse> {
    let logs = state.maintenance_service.list_all().await?;
    let logs: Vec<MaintenanceLogEntryResponse> = logs.into_iter().map(Into::into).collect();
    Ok(Json(logs))
}
