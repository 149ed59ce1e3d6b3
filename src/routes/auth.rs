use axum::{
    extract::State,
    response::{IntoResponse, Json, Redirect},
};
use validator::Validate;

use crate::{
    config::get_config,
    dto::{
        auth_dto::{LoginPayload, RegisterPayload, RegistrationFormResponse, TokenResponse},
        department_dto::DepartmentResponse,
    },
    error::Result,
    utils::token::issue_access_token,
    AppState,
};

/// Departments a new account can pick from.
#[axum::debug_handler]
pub async fn registration_form(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let departments = state.department_service.list().await?;
    Ok(Json(RegistrationFormResponse {
        departments: departments.into_iter().map(DepartmentResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/register/",
    request_body = RegisterPayload,
    responses(
        (status = 303, description = "Account created, redirect to login"),
        (status = 400, description = "Invalid payload or username taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.user_service.register(payload).await?;
    Ok(Redirect::to("/login/"))
}

#[utoipa::path(
    post,
    path = "/login/",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Access token issued", body = Json<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .authenticate(&payload.username, &payload.password)
        .await?;
    let config = get_config();
    let issued = issue_access_token(user.id, user.role(), &config.jwt_secret, config.jwt_ttl_hours)?;
    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");
    Ok(Json(TokenResponse {
        access_token: issued.token,
        token_type: "Bearer".to_string(),
        expires_at: issued.expires_at,
    }))
}
