//! Property (building / plot) entity model and DTOs.

use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `properties` table. Rental offers may point at one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub name: String,
    pub property_type: String,
    /// Free-text district; properties are not district-gated.
    pub district: String,
    pub area: Option<f64>,
    pub front: String,
    pub street: String,
    pub owner_status: String,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Editable property attributes, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct PropertyFields {
    pub name: String,
    pub property_type: String,
    pub district: String,
    pub area: Option<f64>,
    pub front: String,
    pub street: String,
    pub owner_status: String,
}
