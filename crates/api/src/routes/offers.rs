//! Route definitions for the district-scoped offer resources.
//!
//! Rental and sale offers share the same shape; `{district}` is a slug
//! (`central` or `south`) checked by each handler together with the
//! matching permission.

use axum::routing::get;
use axum::Router;

use crate::handlers::{rental_offers, sale_offers};
use crate::state::AppState;

/// Routes mounted at `/rental-offers`.
///
/// ```text
/// GET    /{district}       -> list_offers
/// POST   /{district}       -> create_offer (multipart)
/// GET    /{district}/{id}  -> get_offer
/// PUT    /{district}/{id}  -> update_offer (multipart)
/// DELETE /{district}/{id}  -> delete_offer
/// ```
pub fn rental_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{district}",
            get(rental_offers::list_offers).post(rental_offers::create_offer),
        )
        .route(
            "/{district}/{id}",
            get(rental_offers::get_offer)
                .put(rental_offers::update_offer)
                .delete(rental_offers::delete_offer),
        )
}

/// Routes mounted at `/sale-offers`, same layout as [`rental_router`].
pub fn sale_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{district}",
            get(sale_offers::list_offers).post(sale_offers::create_offer),
        )
        .route(
            "/{district}/{id}",
            get(sale_offers::get_offer)
                .put(sale_offers::update_offer)
                .delete(sale_offers::delete_offer),
        )
}
