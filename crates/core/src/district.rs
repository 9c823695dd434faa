//! Geographic districts that partition listings and their permissions.
//!
//! A district has three spellings:
//!
//! | District  | stored value | URL slug  | permission letter |
//! |-----------|--------------|-----------|-------------------|
//! | `Central` | `وسط`        | `central` | `m`               |
//! | `South`   | `جنوب`       | `south`   | `w`               |
//!
//! The stored value is what lives in the `district` column, the slug is used
//! in API paths, and the letter is baked into permission tags such as
//! `rentalm_offers_view`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stored value for the central district.
pub const CENTRAL_STORED: &str = "وسط";

/// Stored value for the south district.
pub const SOUTH_STORED: &str = "جنوب";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum District {
    Central,
    South,
}

impl District {
    pub const ALL: [District; 2] = [District::Central, District::South];

    /// Parse the slug used in request paths (`central` / `south`).
    ///
    /// The stored Arabic value is accepted too so that links built from
    /// database rows resolve.
    pub fn from_slug(slug: &str) -> Result<Self, CoreError> {
        match slug.trim() {
            "central" | CENTRAL_STORED => Ok(Self::Central),
            "south" | SOUTH_STORED => Ok(Self::South),
            other => Err(CoreError::Validation(format!(
                "Unknown district '{other}'. Must be one of: central, south"
            ))),
        }
    }

    /// Parse the value stored in the `district` column.
    pub fn from_stored(value: &str) -> Result<Self, CoreError> {
        match value {
            CENTRAL_STORED => Ok(Self::Central),
            SOUTH_STORED => Ok(Self::South),
            other => Err(CoreError::Validation(format!(
                "Unknown stored district '{other}'"
            ))),
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Central => CENTRAL_STORED,
            Self::South => SOUTH_STORED,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Central => "central",
            Self::South => "south",
        }
    }

    /// Letter used inside permission tags (`rentalm_…`, `salesw_…`).
    pub fn permission_letter(self) -> char {
        match self {
            Self::Central => 'm',
            Self::South => 'w',
        }
    }

    /// Human-readable district name shown on detail pages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Central => "المنطقة الوسطى",
            Self::South => "المنطقة الجنوبية",
        }
    }
}
