use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /      -> list_orders   (orders_view)
/// POST   /      -> create_order  (orders_add)
/// GET    /{id}  -> get_order     (orders_view)
/// PUT    /{id}  -> update_order  (orders_edit)
/// DELETE /{id}  -> delete_order  (orders_delete)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
}
