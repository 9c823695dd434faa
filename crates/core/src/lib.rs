//! Domain rules for the Aqar back office.
//!
//! Nothing in here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod district;
pub mod error;
pub mod form;
pub mod images;
pub mod permissions;
pub mod types;
