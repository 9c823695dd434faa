//! Handlers for the `/orders` resource (customer requests).

use aqar_core::error::CoreError;
use aqar_core::form::{clip_opt, parse_decimal, parse_whole, LONG_TEXT, NAME_TEXT, UNIT_TEXT};
use aqar_core::types::DbId;
use aqar_db::models::order::{CreateOrder, Order, UpdateOrder};
use aqar_db::repositories::OrderRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer};

use crate::audit;
use crate::error::{AppError, AppResult};
use crate::middleware::permission::{
    OrdersAdd, OrdersDelete, OrdersEdit, OrdersView, RequirePermission,
};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Body of `POST /orders` and `PUT /orders/{id}`.
///
/// `area` and `price` accept either JSON numbers or free text such as
/// `"1,200"`; anything unreadable is stored as null.
#[derive(Debug, Default, Deserialize)]
pub struct OrderRequest {
    pub customer_name: Option<String>,
    pub unit_type: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "loose_number")]
    pub price: Option<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub marketer: Option<String>,
    pub notes: Option<String>,
}

/// Read a JSON string or number as text for the lenient form parsers.
fn loose_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

impl OrderRequest {
    fn area(&self) -> Option<i32> {
        parse_whole(self.area.as_deref())
    }

    fn price(&self) -> Option<f64> {
        parse_decimal(self.price.as_deref())
    }

    fn into_update(self) -> UpdateOrder {
        UpdateOrder {
            area: self.area(),
            price: self.price(),
            unit_type: clip_opt(self.unit_type.as_deref(), UNIT_TEXT),
            location: clip_opt(self.location.as_deref(), UNIT_TEXT),
            phone: clip_opt(self.phone.as_deref(), UNIT_TEXT),
            marketer: clip_opt(self.marketer.as_deref(), NAME_TEXT),
            notes: clip_opt(self.notes.as_deref(), LONG_TEXT),
        }
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Order",
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/orders
pub async fn list_orders(
    State(state): State<AppState>,
    _gate: RequirePermission<OrdersView>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    let orders = OrderRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    _gate: RequirePermission<OrdersView>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: order }))
}

/// POST /api/v1/orders
pub async fn create_order(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<OrdersAdd>,
    Json(input): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Order>>)> {
    let customer_name = clip_opt(input.customer_name.as_deref(), UNIT_TEXT);
    if customer_name.is_empty() {
        return Err(AppError::Core(CoreError::required("customer_name")));
    }
    let fields = input.into_update();
    if fields.unit_type.is_empty() {
        return Err(AppError::Core(CoreError::required("unit_type")));
    }

    let create = CreateOrder {
        customer_name,
        unit_type: fields.unit_type,
        area: fields.area,
        price: fields.price,
        location: fields.location,
        phone: fields.phone,
        marketer: fields.marketer,
        notes: fields.notes,
    };
    let order = OrderRepo::create(&state.pool, &create).await?;

    tracing::info!(order_id = order.id, by = %user.username, "Order created");
    audit::record(&state, &user.username, &audit::order_added(&order.customer_name)).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// PUT /api/v1/orders/{id}
///
/// Overwrites every editable field; the customer name stays as recorded.
pub async fn update_order(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<OrdersEdit>,
    Path(id): Path<DbId>,
    Json(input): Json<OrderRequest>,
) -> AppResult<Json<DataResponse<Order>>> {
    let order = OrderRepo::update(&state.pool, id, &input.into_update())
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(&state, &user.username, &audit::order_edited(&order.customer_name)).await;

    Ok(Json(DataResponse { data: order }))
}

/// DELETE /api/v1/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    RequirePermission(user, _): RequirePermission<OrdersDelete>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let order = OrderRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    audit::record(&state, &user.username, &audit::order_deleted(&order.customer_name)).await;

    Ok(StatusCode::NO_CONTENT)
}
