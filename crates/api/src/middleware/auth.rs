//! JWT-based authentication extractor for Axum handlers.

use aqar_core::error::CoreError;
use aqar_core::permissions::PermissionSet;
use aqar_core::types::DbId;
use aqar_db::repositories::EmployeeRepo;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated employee extracted from a Bearer token.
///
/// The token only proves identity; the employee row is re-read on every
/// request so permission changes apply immediately and deleted employees
/// lose access even while their token is still unexpired.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     user.require("orders_view")?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub employee_id: DbId,
    pub username: String,
    pub name: String,
    pub permissions: PermissionSet,
}

impl AuthUser {
    /// `Forbidden` unless the employee holds `tag`.
    pub fn require(&self, tag: &str) -> Result<(), AppError> {
        if self.permissions.contains(tag) {
            Ok(())
        } else {
            tracing::debug!(username = %self.username, permission = tag, "Permission denied");
            Err(AppError::Core(CoreError::missing_permission(tag)))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let employee = EmployeeRepo::find_by_id(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Employee no longer exists".into()))
            })?;

        Ok(AuthUser {
            employee_id: employee.id,
            permissions: employee.permission_set(),
            username: employee.username,
            name: employee.name,
        })
    }
}
