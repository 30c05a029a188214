//! Handlers for the `/admin` resource: registration, login, account-status
//! management, and the action audit log.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use commhub_core::error::CoreError;
use commhub_core::roles::{
    is_valid_account_status, is_valid_admin_role, ACCOUNT_ACTIVE, ACCOUNT_PENDING,
    ACCOUNT_SUSPENDED,
};
use commhub_core::types::{DbId, Timestamp};
use commhub_db::models::admin::{Admin, CreateAdmin};
use commhub_db::models::admin_action::{AdminAction, CreateAdminAction};
use commhub_db::repositories::{AdminActionRepo, AdminRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::{check_password_strength, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::handlers::auth::validate_email;
use crate::middleware::identity::{ClientMeta, RequireSuperAdmin};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/register`.
#[derive(Debug, Deserialize)]
pub struct AdminRegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub admin_role: String,
    pub country: Option<String>,
    pub account_status: Option<String>,
}

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `PATCH /admin/admins/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct AccountStatusRequest {
    pub account_status: String,
}

/// Query parameters for `GET /admin/actions`.
#[derive(Debug, Deserialize)]
pub struct ActionsQuery {
    /// Maximum number of results. Defaults to 50, capped at 200.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for the audit log listing.
const MAX_ACTIONS_LIMIT: i64 = 200;

/// Default page size for the audit log listing.
const DEFAULT_ACTIONS_LIMIT: i64 = 50;

/// Public admin info embedded in responses. Never carries the hash.
#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub role: String,
    pub country: Option<String>,
    pub account_status: String,
    pub created_at: Timestamp,
}

impl From<Admin> for AdminInfo {
    fn from(admin: Admin) -> Self {
        AdminInfo {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            role: admin.role,
            country: admin.country,
            account_status: admin.account_status,
            created_at: admin.created_at,
        }
    }
}

/// Response body for successful admin registration and login.
#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    pub success: bool,
    pub admin: AdminInfo,
}

// ---------------------------------------------------------------------------
// Registration / login
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/register
///
/// Create an admin account. New accounts default to `pending` until a
/// super admin activates them.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<AdminRegisterRequest>,
) -> AppResult<(StatusCode, Json<AdminAuthResponse>)> {
    validate_email(&input.email)?;
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }
    if !is_valid_admin_role(&input.admin_role) {
        return Err(AppError::BadRequest(format!(
            "admin_role must be one of super_admin, validator_admin, got '{}'",
            input.admin_role
        )));
    }
    let account_status = input.account_status.unwrap_or_else(|| ACCOUNT_PENDING.to_string());
    if !is_valid_account_status(&account_status) {
        return Err(AppError::BadRequest(format!(
            "account_status must be one of active, pending, suspended, got '{account_status}'"
        )));
    }
    check_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            email: input.email,
            name: input.name,
            password_hash,
            role: input.admin_role,
            country: input.country,
            account_status,
        },
    )
    .await?;

    tracing::info!(admin = %admin.email, role = %admin.role, "Admin registered");

    Ok((
        StatusCode::CREATED,
        Json(AdminAuthResponse {
            success: true,
            admin: admin.into(),
        }),
    ))
}

/// POST /api/v1/admin/login
///
/// Authenticate an admin. Pending and suspended accounts are refused
/// with 403 even when the credentials are correct.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<AdminLoginRequest>,
) -> AppResult<Json<AdminAuthResponse>> {
    let admin = AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid_credentials());
    }

    match admin.account_status.as_str() {
        ACCOUNT_ACTIVE => {}
        ACCOUNT_SUSPENDED => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is suspended".into(),
            )));
        }
        _ => {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is pending approval".into(),
            )));
        }
    }

    Ok(Json(AdminAuthResponse {
        success: true,
        admin: admin.into(),
    }))
}

// ---------------------------------------------------------------------------
// Account-status management
// ---------------------------------------------------------------------------

/// PATCH /api/v1/admin/admins/{id}/status
///
/// Overwrite another admin's account status. Super admin only; the change
/// is recorded in the action audit log (best effort).
pub async fn update_account_status(
    RequireSuperAdmin(acting): RequireSuperAdmin,
    meta: ClientMeta,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AccountStatusRequest>,
) -> AppResult<Json<AdminInfo>> {
    if !is_valid_account_status(&input.account_status) {
        return Err(AppError::BadRequest(format!(
            "account_status must be one of active, pending, suspended, got '{}'",
            input.account_status
        )));
    }

    let updated = AdminRepo::update_account_status(&state.pool, id, &input.account_status)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Admin",
                id: id.to_string(),
            })
        })?;

    // Best-effort audit entry; failure never fails the status change.
    let audit = CreateAdminAction {
        admin_email: acting.email.clone(),
        action_type: "account_status_change".to_string(),
        target_type: Some("admin".to_string()),
        target_id: Some(id.to_string()),
        description: Some(format!(
            "Set account status of {} to {}",
            updated.email, updated.account_status
        )),
        ip_address: meta.ip_address,
        user_agent: meta.user_agent,
    };
    if let Err(e) = AdminActionRepo::create(&state.pool, &audit).await {
        tracing::warn!(error = %e, admin = %acting.email, "Failed to record audit entry");
    }

    Ok(Json(updated.into()))
}

/// GET /api/v1/admin/actions
///
/// List the action audit log, newest first. Super admin only.
pub async fn list_actions(
    RequireSuperAdmin(_acting): RequireSuperAdmin,
    State(state): State<AppState>,
    Query(params): Query<ActionsQuery>,
) -> AppResult<Json<Vec<AdminAction>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_ACTIONS_LIMIT)
        .clamp(1, MAX_ACTIONS_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let actions = AdminActionRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(actions))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}
