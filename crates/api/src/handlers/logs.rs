use aqar_db::models::audit::AuditLog;
use aqar_db::repositories::AuditLogRepo;
use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::middleware::permission::{LogsView, RequirePermission};
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/logs?limit=
///
/// Most recent entries first; 100 by default.
pub async fn list_logs(
    State(state): State<AppState>,
    _gate: RequirePermission<LogsView>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<AuditLog>>>> {
    let logs = AuditLogRepo::list_recent(&state.pool, params.limit).await?;
    Ok(Json(DataResponse { data: logs }))
}
