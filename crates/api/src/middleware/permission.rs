//! Permission-gate extractors for routes guarded by a fixed tag.
//!
//! Offer routes are gated per district, so their tag is only known after the
//! path is parsed; those handlers call [`AuthUser::require`] directly.

use std::marker::PhantomData;

use aqar_core::permissions;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A compile-time permission tag.
pub trait PermissionTag {
    const TAG: &'static str;
}

/// Requires the employee to hold `P::TAG`. Rejects with 403 otherwise.
///
/// ```ignore
/// async fn list(RequirePermission(user, _): RequirePermission<OrdersView>) -> AppResult<..> {
///     // user holds orders_view here
/// }
/// ```
pub struct RequirePermission<P>(pub AuthUser, pub PhantomData<P>);

impl<P> FromRequestParts<AppState> for RequirePermission<P>
where
    P: PermissionTag + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.require(P::TAG)?;
        Ok(RequirePermission(user, PhantomData))
    }
}

macro_rules! permission_tags {
    ($($marker:ident => $tag:path),* $(,)?) => {
        $(
            pub struct $marker;

            impl PermissionTag for $marker {
                const TAG: &'static str = $tag;
            }
        )*
    };
}

permission_tags! {
    LogsView => permissions::LOGS_VIEW,
    ListEmployees => permissions::LIST_EMPLOYEES,
    AddEmployee => permissions::ADD_EMPLOYEE,
    EditEmployee => permissions::EDIT_EMPLOYEE,
    DeleteEmployee => permissions::DELETE_EMPLOYEE,
    OrdersView => permissions::ORDERS_VIEW,
    OrdersAdd => permissions::ORDERS_ADD,
    OrdersEdit => permissions::ORDERS_EDIT,
    OrdersDelete => permissions::ORDERS_DELETE,
    PropertiesView => permissions::PROPERTIES_VIEW,
    PropertiesAdd => permissions::PROPERTIES_ADD,
    PropertiesEdit => permissions::PROPERTIES_EDIT,
    PropertiesDelete => permissions::PROPERTIES_DELETE,
}
