use aqar_core::permissions::{self, PermissionInfo};
use axum::Json;

use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

/// GET /api/v1/permissions
///
/// The assignable permission catalog, in display order.
pub async fn list_permissions(_user: AuthUser) -> Json<DataResponse<Vec<PermissionInfo>>> {
    Json(DataResponse {
        data: permissions::catalog(),
    })
}
