//! Aqar back-office API server library.
//!
//! Exposes the building blocks (config, state, error handling, storage
//! backends, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod audit;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod storage;
