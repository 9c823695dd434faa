//! Authentication and permission extractors.
//!
//! - [`auth::AuthUser`] -- the logged-in employee, loaded fresh per request.
//! - [`permission::RequirePermission`] -- rejects with 403 unless the
//!   employee holds a fixed permission tag.

pub mod auth;
pub mod permission;
