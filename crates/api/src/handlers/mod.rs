//! Request handlers.
//!
//! Handlers are thin adapters: they load the catalog or read the request,
//! hand the data to the pure derivations in `storefront_core`, and wrap the
//! result in a response envelope.

pub mod catalog;
pub mod feedback;
