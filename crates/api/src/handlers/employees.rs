//! Handlers for the `/employees` resource.

use aqar_core::error::CoreError;
use aqar_core::form::{clip, NAME_TEXT, SHORT_TEXT};
use aqar_core::permissions;
use aqar_core::types::DbId;
use aqar_db::models::employee::{CreateEmployee, EmployeeResponse, UpdateEmployee};
use aqar_db::repositories::EmployeeRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::audit;
use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::middleware::permission::{
    AddEmployee, DeleteEmployee, EditEmployee, ListEmployees, RequirePermission,
};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Omitted fields keep their value. A blank password leaves it unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Replaces the whole list when present.
    pub permissions: Option<Vec<String>>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Employee",
        id,
    })
}

fn hash(password: &str) -> AppResult<String> {
    validate_password_strength(password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))
}

/// Trimmed, clipped and non-blank.
fn required(value: &str, field: &str, max_chars: usize) -> AppResult<String> {
    let value = clip(value, max_chars);
    if value.is_empty() {
        return Err(AppError::Core(CoreError::required(field)));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/employees
pub async fn list_employees(
    State(state): State<AppState>,
    _gate: RequirePermission<ListEmployees>,
) -> AppResult<Json<DataResponse<Vec<EmployeeResponse>>>> {
    let employees = EmployeeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: employees.iter().map(EmployeeResponse::from).collect(),
    }))
}

/// GET /api/v1/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    _gate: RequirePermission<ListEmployees>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EmployeeResponse>>> {
    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: EmployeeResponse::from(&employee),
    }))
}

/// POST /api/v1/employees
pub async fn create_employee(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<AddEmployee>,
    Json(input): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<EmployeeResponse>>)> {
    let name = required(&input.name, "name", NAME_TEXT)?;
    let username = required(&input.username, "username", NAME_TEXT)?;
    let password = input.password.trim();
    if password.is_empty() {
        return Err(AppError::Core(CoreError::required("password")));
    }
    let permissions = permissions::normalize(&input.permissions)?;

    if EmployeeRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{username}' is already taken"
        ))));
    }

    let create = CreateEmployee {
        name,
        role: clip(&input.role, SHORT_TEXT),
        username,
        password_hash: hash(password)?,
        permissions,
    };
    let employee = EmployeeRepo::create(&state.pool, &create).await?;

    tracing::info!(employee_id = employee.id, by = %user.username, "Employee created");
    audit::record(&state, &user.username, &audit::employee_added(&employee.name)).await;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: EmployeeResponse::from(&employee),
        }),
    ))
}

/// PUT /api/v1/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<EditEmployee>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<DataResponse<EmployeeResponse>>> {
    EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let name = input
        .name
        .as_deref()
        .map(|n| required(n, "name", NAME_TEXT))
        .transpose()?;
    let username = input
        .username
        .as_deref()
        .map(|u| required(u, "username", NAME_TEXT))
        .transpose()?;
    let permissions = input
        .permissions
        .as_ref()
        .map(permissions::normalize)
        .transpose()?;

    if let Some(username) = &username {
        if let Some(other) = EmployeeRepo::find_by_username(&state.pool, username).await? {
            if other.id != id {
                return Err(AppError::Core(CoreError::Conflict(format!(
                    "Username '{username}' is already taken"
                ))));
            }
        }
    }

    let password_hash = input
        .password
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(hash)
        .transpose()?;

    let update = UpdateEmployee {
        name,
        role: input.role.as_deref().map(|r| clip(r, SHORT_TEXT)),
        username,
        permissions,
        password_hash,
    };
    let employee = EmployeeRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(&state, &user.username, &audit::employee_edited(&employee.name)).await;

    Ok(Json(DataResponse {
        data: EmployeeResponse::from(&employee),
    }))
}

/// DELETE /api/v1/employees/{id}
///
/// An employee cannot delete their own account.
pub async fn delete_employee(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<DeleteEmployee>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == user.employee_id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot delete your own account".into(),
        )));
    }

    let employee = EmployeeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !EmployeeRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(employee_id = id, by = %user.username, "Employee deleted");
    audit::record(&state, &user.username, &audit::employee_deleted(&employee.name)).await;

    Ok(StatusCode::NO_CONTENT)
}
