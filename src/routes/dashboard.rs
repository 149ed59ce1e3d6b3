use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::dashboard_dto::DashboardResponse, error::Result, middleware::auth::AuthUser, AppState,
};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Asset and cost aggregates", body = Json<DashboardResponse>),
        (status = 401, description = "Not authenticated")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Result<impl IntoResponse> {
    let summary = state.dashboard_service.summary().await?;
    Ok(Json(DashboardResponse::from(summary)))
}
