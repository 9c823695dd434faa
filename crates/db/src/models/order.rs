//! Customer order (request) model and DTOs.

use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `orders` table: what a customer is looking for.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub customer_name: String,
    pub unit_type: String,
    pub area: Option<i32>,
    pub price: Option<f64>,
    pub location: String,
    pub phone: String,
    pub marketer: String,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an order.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_name: String,
    pub unit_type: String,
    pub area: Option<i32>,
    pub price: Option<f64>,
    pub location: String,
    pub phone: String,
    pub marketer: String,
    pub notes: String,
}

/// DTO for editing an order. The customer name is fixed once recorded.
#[derive(Debug, Clone)]
pub struct UpdateOrder {
    pub unit_type: String,
    pub area: Option<i32>,
    pub price: Option<f64>,
    pub location: String,
    pub phone: String,
    pub marketer: String,
    pub notes: String,
}
