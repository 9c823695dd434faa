//! Rental offer entity model and DTOs.

use aqar_core::district::District;
use aqar_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rental_offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalOffer {
    pub id: DbId,
    pub property_id: Option<DbId>,
    /// Stored district value (`وسط` / `جنوب`).
    pub district: String,
    pub unit_type: String,
    pub floor: String,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub details: String,
    pub owner_type: String,
    pub location: String,
    pub marketer: String,
    pub notes: String,
    pub status: String,
    /// Stored image references (filenames or public URLs).
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Editable listing attributes, shared by create and update.
///
/// Update overwrites every attribute with the submitted form, so a blank
/// field clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct RentalOfferFields {
    pub property_id: Option<DbId>,
    pub unit_type: String,
    pub floor: String,
    pub area: Option<f64>,
    pub price: Option<f64>,
    pub details: String,
    pub owner_type: String,
    pub location: String,
    pub marketer: String,
    pub notes: String,
    pub status: String,
}

/// DTO for inserting a rental offer.
#[derive(Debug, Clone)]
pub struct CreateRentalOffer {
    pub district: District,
    pub fields: RentalOfferFields,
    pub images: Vec<String>,
}
