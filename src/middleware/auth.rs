//! Request authentication and capability gates.
//!
//! Handlers declare what they need as extractors: [`AuthUser`] for any signed-in
//! user, [`Require<C>`] for a [`Capability`] such as [`ManageAssets`]. Both run
//! before the handler body, so a denied request never reaches the mutation.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{
    config::get_config,
    error::{Error, Result},
    models::user::User,
    utils::token::decode_access_token,
    AppState,
};

fn bearer_token(parts: &Parts) -> Result<&str> {
    let Some(auth_header) = parts.headers.get(AUTHORIZATION) else {
        return Err(Error::Unauthorized("missing_authorization".into()));
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(Error::Unauthorized("bad_authorization".into()));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(Error::Unauthorized("unsupported_scheme".into()));
    };
    Ok(token)
}

/// Resolves the bearer token to a live, active user. Flags are read from the
/// database, not from the token.
async fn authenticate(parts: &Parts, state: &AppState) -> Result<User> {
    let token = bearer_token(parts)?;
    let claims = decode_access_token(token, &get_config().jwt_secret)?;
    let user_id = claims.user_id()?;
    match state.user_service.find_by_id(user_id).await? {
        Some(user) if user.is_active => Ok(user),
        _ => Err(Error::Unauthorized("invalid_token".into())),
    }
}

/// Any authenticated, active user. Rejects with 401.
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        authenticate(parts, state).await.map(AuthUser)
    }
}

/// The authenticated user if a valid token was presented. Never rejects on
/// authentication failure; database errors still propagate.
pub struct MaybeAuthUser(pub Option<User>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        match authenticate(parts, state).await {
            Ok(user) => Ok(MaybeAuthUser(Some(user))),
            Err(Error::Unauthorized(_)) | Err(Error::Token(_)) => Ok(MaybeAuthUser(None)),
            Err(other) => Err(other),
        }
    }
}

/// An authorization predicate over a user.
pub trait Capability: Send + Sync + 'static {
    const DENIED: &'static str;

    fn permits(user: &User) -> bool;
}

/// Create assets: managers and superusers.
pub struct ManageAssets;

impl Capability for ManageAssets {
    const DENIED: &'static str = "You do not have manager access.";

    fn permits(user: &User) -> bool {
        user.is_manager || user.is_superuser
    }
}

/// Administration endpoints.
pub struct Superuser;

impl Capability for Superuser {
    const DENIED: &'static str = "Superuser access required.";

    fn permits(user: &User) -> bool {
        user.is_superuser
    }
}

/// A user holding capability `C`. Anonymous requests are rejected with 403 as
/// well, not 401.
pub struct Require<C: Capability>(pub User, PhantomData<C>);

impl<C: Capability> Require<C> {
    pub fn user(&self) -> &User {
        &self.0
    }
}

/// Evaluates `C` against an optional user.
pub fn authorize<C: Capability>(user: Option<User>) -> Result<User> {
    match user {
        Some(user) if C::permits(&user) => Ok(user),
        _ => Err(Error::Forbidden(C::DENIED.into())),
    }
}

#[async_trait]
impl<C: Capability> FromRequestParts<AppState> for Require<C> {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(parts, state).await?;
        let username = user.as_ref().map(|u| u.username.clone());
        match authorize::<C>(user) {
            Ok(user) => Ok(Require(user, PhantomData)),
            Err(err) => {
                tracing::warn!(
                    user = username.as_deref().unwrap_or("anonymous"),
                    path = %parts.uri.path(),
                    "Access denied"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(is_manager: bool, is_superuser: bool) -> User {
        User {
            id: Uuid::new_v4(),
            username: "tester".into(),
            email: None,
            password_hash: String::new(),
            department_id: None,
            is_manager,
            is_superuser,
            is_active: true,
            date_joined: Utc::now(),
        }
    }

    #[test]
    fn managers_and_superusers_may_manage_assets() {
        assert!(ManageAssets::permits(&user(true, false)));
        assert!(ManageAssets::permits(&user(false, true)));
        assert!(!ManageAssets::permits(&user(false, false)));
    }

    #[test]
    fn only_superusers_pass_superuser_gate() {
        assert!(Superuser::permits(&user(false, true)));
        assert!(!Superuser::permits(&user(true, false)));
    }

    #[test]
    fn anonymous_is_forbidden() {
        let err = authorize::<ManageAssets>(None).unwrap_err();
        assert!(matches!(err, Error::Forbidden(ref msg) if msg == ManageAssets::DENIED));
    }

    #[test]
    fn plain_staff_is_forbidden() {
        assert!(matches!(
            authorize::<ManageAssets>(Some(user(false, false))),
            Err(Error::Forbidden(_))
        ));
    }
}
