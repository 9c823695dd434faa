//! Sale offer entity model and DTOs.

use aqar_core::district::District;
use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sale_offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SaleOffer {
    pub id: DbId,
    pub district: String,
    pub unit_type: String,
    pub floor: String,
    pub front: String,
    pub street: String,
    pub area: Option<f64>,
    pub price: Option<f64>,
    /// Lowest price the owner accepts.
    pub sale_limit: Option<f64>,
    pub location: String,
    pub details: String,
    pub marketer: String,
    pub owner_type: String,
    pub status: String,
    pub notes: String,
    pub images: Vec<String>,
    /// Username of the employee who entered the offer.
    pub created_by: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Editable listing attributes, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct SaleOfferFields {
    pub unit_type: String,
    pub floor: String,
    pub front: String,
    pub street: String,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub sale_limit: Option<f64>,
    pub location: String,
    pub details: String,
    pub marketer: String,
    pub owner_type: String,
    pub status: String,
    pub notes: String,
}

/// DTO for inserting a sale offer.
#[derive(Debug, Clone)]
pub struct CreateSaleOffer {
    pub district: District,
    pub fields: SaleOfferFields,
    pub images: Vec<String>,
    pub created_by: String,
}
