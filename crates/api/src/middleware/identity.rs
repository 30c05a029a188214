//! Caller-identity extractors for Axum handlers.
//!
//! Admin-gated endpoints identify the caller through the `x-admin-email`
//! header, resolved against the `admins` table. Session and token design
//! is deliberately out of scope; the extractors assert existence and
//! account status only.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use commhub_core::error::CoreError;
use commhub_core::roles::{ACCOUNT_ACTIVE, ROLE_SUPER_ADMIN};
use commhub_db::models::admin::Admin;
use commhub_db::repositories::AdminRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the acting admin's email.
pub const ADMIN_EMAIL_HEADER: &str = "x-admin-email";

/// The acting admin, resolved from the `x-admin-email` header.
///
/// Rejects with 401 when the header is missing or names no admin, and
/// with 403 when the account is not `active`.
///
/// ```ignore
/// async fn admin_only(AdminIdentity(admin): AdminIdentity) -> AppResult<Json<()>> {
///     tracing::info!(admin = %admin.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
pub struct AdminIdentity(pub Admin);

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(ADMIN_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing x-admin-email header".into(),
                ))
            })?;

        let admin = AdminRepo::find_by_email(&state.pool, email)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Unknown admin account".into()))
            })?;

        if admin.account_status != ACCOUNT_ACTIVE {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin account is not active".into(),
            )));
        }

        Ok(AdminIdentity(admin))
    }
}

/// Requires the `super_admin` role. Rejects with 403 Forbidden otherwise.
pub struct RequireSuperAdmin(pub Admin);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AdminIdentity(admin) = AdminIdentity::from_request_parts(parts, state).await?;
        if admin.role != ROLE_SUPER_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Super admin role required".into(),
            )));
        }
        Ok(RequireSuperAdmin(admin))
    }
}

/// The raw `x-admin-email` header value, if any. Never rejects.
///
/// Used by endpoints that accept the acting admin's email from either the
/// header or the request body and resolve it themselves.
pub struct AdminEmailHeader(pub Option<String>);

impl<S> FromRequestParts<S> for AdminEmailHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(ADMIN_EMAIL_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        Ok(AdminEmailHeader(email))
    }
}

/// Best-effort client metadata captured for audit entries. Never rejects.
pub struct ClientMeta {
    /// Taken from `x-forwarded-for` (first hop).
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|s| s.trim().to_string());
        let user_agent = parts
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        Ok(ClientMeta {
            ip_address,
            user_agent,
        })
    }
}
