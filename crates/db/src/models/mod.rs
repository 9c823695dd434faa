//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO for edits

pub mod audit;
pub mod dashboard;
pub mod employee;
pub mod order;
pub mod property;
pub mod rental_offer;
pub mod sale_offer;
pub mod session;
