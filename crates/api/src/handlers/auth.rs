//! Handlers for the `/auth` resource (login, refresh, logout, me).

use aqar_core::error::CoreError;
use aqar_db::models::employee::{Employee, EmployeeResponse};
use aqar_db::models::session::CreateSession;
use aqar_db::repositories::{EmployeeRepo, SessionRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::audit;
use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub employee: EmployeeResponse,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = input.username.trim();
    let password = input.password.trim();

    let employee = EmployeeRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(password, &employee.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username, "Failed login attempt");
        return Err(invalid_credentials());
    }

    EmployeeRepo::record_successful_login(&state.pool, employee.id).await?;
    audit::record(&state, &employee.username, audit::LOGIN).await;

    let response = create_auth_response(&state, &employee).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new pair. The used token is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::redeem(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let employee = EmployeeRepo::find_by_id(&state.pool, session.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Employee no longer exists".into()))
        })?;

    let response = create_auth_response(&state, &employee).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke every session of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_employee(&state.pool, user.employee_id).await?;
    audit::record(&state, &user.username, audit::LOGOUT).await;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<EmployeeResponse>>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, user.employee_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Employee",
            id: user.employee_id,
        }))?;
    Ok(Json(DataResponse {
        data: EmployeeResponse::from(&employee),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Issue tokens, persist the refresh session, and build the response.
async fn create_auth_response(state: &AppState, employee: &Employee) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(employee.id, &employee.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    let session_input = CreateSession {
        employee_id: employee.id,
        refresh_token_hash: refresh_hash,
        expires_at,
    };
    SessionRepo::create(&state.pool, &session_input).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        employee: EmployeeResponse::from(employee),
    })
}
