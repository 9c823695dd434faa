pub mod auth;
pub mod employees;
pub mod health;
pub mod offers;
pub mod orders;
pub mod properties;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout
/// /auth/me                             current employee
///
/// /dashboard                           entity counts
/// /permissions                         assignable permission catalog
///
/// /employees                           list, create
/// /employees/{id}                      get, update, delete
///
/// /rental-offers/{district}            list, create
/// /rental-offers/{district}/{id}       get, update, delete
/// /sale-offers/{district}              list, create
/// /sale-offers/{district}/{id}         get, update, delete
///
/// /orders                              list, create
/// /orders/{id}                         get, update, delete
///
/// /properties                          list, create
/// /properties/{id}                     get, update, delete
///
/// /logs?limit=                         audit trail, newest first
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/dashboard", get(handlers::dashboard::get_dashboard))
        .route("/permissions", get(handlers::permissions::list_permissions))
        .nest("/employees", employees::router())
        .nest("/rental-offers", offers::rental_router())
        .nest("/sale-offers", offers::sale_router())
        .nest("/orders", orders::router())
        .nest("/properties", properties::router())
        .route("/logs", get(handlers::logs::list_logs))
}
