use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    error::Result,
    middleware::auth::MaybeAuthUser,
    services::export_service::{ExportService, ASSET_REPORT_FILENAME},
    AppState,
};

/// Export every asset as CSV. Open to anonymous callers.
#[axum::debug_handler]
pub async fn export_assets_csv(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<impl IntoResponse> {
    let rows = state.asset_service.list_for_export().await?;
    let body = ExportService::render_assets_csv(&rows);
    tracing::info!(
        rows = rows.len(),
        user = user.as_ref().map(|u| u.username.as_str()).unwrap_or("anonymous"),
        "Asset report exported"
    );

    let disposition = format!("attachment; filename=\"{}\"", ASSET_REPORT_FILENAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
