pub mod auth;
pub mod dashboard;
pub mod employees;
pub mod logs;
pub mod orders;
pub mod permissions;
pub mod properties;
pub mod rental_offers;
pub mod sale_offers;

use aqar_core::district::District;
use serde::Serialize;

/// Single offer plus the display details of its district.
#[derive(Debug, Serialize)]
pub struct OfferDetail<T: Serialize> {
    #[serde(flatten)]
    pub offer: T,
    pub district_slug: &'static str,
    pub district_label: &'static str,
}

impl<T: Serialize> OfferDetail<T> {
    pub fn new(offer: T, district: District) -> Self {
        Self {
            offer,
            district_slug: district.slug(),
            district_label: district.label(),
        }
    }
}
