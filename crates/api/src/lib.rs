//! Storefront API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! catalog source) so integration tests and the binary entrypoint can both
//! access them.

pub mod catalog_source;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
