use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json, Redirect},
};
use validator::Validate;

use crate::{
    dto::{
        asset_dto::{
            AssetFormResponse, AssetListQuery, AssetListResponse, AssetTypeChoice,
            CreateAssetPayload,
        },
        user_dto::UserChoice,
    },
    error::Result,
    middleware::auth::{AuthUser, ManageAssets, Require},
    models::asset::AssetType,
    services::asset_service::PageRequest,
    AppState,
};

#[utoipa::path(
    get,
    path = "/list/",
    params(
        ("page" = Option<String>, Query, description = "Page number starting at 1, or `last`")
    ),
    responses(
        (status = 200, description = "Page of assets, newest first", body = Json<AssetListResponse>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Page out of range or not a number")
    )
)]
#[axum::debug_handler]
pub async fn list_assets(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Query(query): Query<AssetListQuery>,
) -> Result<impl IntoResponse> {
    let request = query
        .page
        .as_deref()
        .map(str::parse::<PageRequest>)
        .transpose()?
        .unwrap_or_default();
    let page = state.asset_service.list_page(request).await?;
    Ok(Json(AssetListResponse::from(page)))
}

/// Choices for the asset creation form.
#[axum::debug_handler]
pub async fn asset_form(
    State(state): State<AppState>,
    _manager: Require<ManageAssets>,
) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(AssetFormResponse {
        asset_types: AssetType::ALL.into_iter().map(AssetTypeChoice::from).collect(),
        users: users
            .into_iter()
            .filter(|u| u.is_active)
            .map(UserChoice::from)
            .collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/create/",
    request_body = CreateAssetPayload,
    responses(
        (status = 303, description = "Asset created, redirect to the asset list"),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Manager access required")
    )
)]
#[axum::debug_handler]
pub async fn create_asset(
    State(state): State<AppState>,
    manager: Require<ManageAssets>,
    Json(payload): Json<CreateAssetPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let asset = state.asset_service.create(payload).await?;
    tracing::info!(asset_id = %asset.id, created_by = %manager.user().username, "Asset created via form");
    Ok(Redirect::to("/list/"))
}
