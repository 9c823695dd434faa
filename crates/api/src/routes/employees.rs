use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

/// Routes mounted at `/employees`.
///
/// ```text
/// GET    /      -> list_employees   (list_employees)
/// POST   /      -> create_employee  (add_employee)
/// GET    /{id}  -> get_employee     (list_employees)
/// PUT    /{id}  -> update_employee  (edit_employee)
/// DELETE /{id}  -> delete_employee  (delete_employee)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
}
