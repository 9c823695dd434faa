//! Handler for the landing dashboard.

use aqar_db::models::dashboard::DashboardCounts;
use aqar_db::repositories::DashboardRepo;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    /// Display name of the logged-in employee.
    pub name: String,
    /// Tags the caller holds, so the client can hide unusable sections.
    pub permissions: Vec<String>,
    pub counts: DashboardCounts,
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(DataResponse {
        data: DashboardView {
            name: user.name,
            permissions: user.permissions.into_tags(),
            counts,
        },
    }))
}
