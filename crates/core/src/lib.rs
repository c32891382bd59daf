//! Storefront domain logic.
//!
//! Pure catalog pipeline (load → filter → paginate → render) plus the
//! feedback validation rules and storage trait. No I/O happens here; the
//! API crate fetches catalog bytes and the DB crate implements storage.

pub mod addressing;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod game;
pub mod pagination;
pub mod render;
pub mod types;
pub mod view_state;
pub mod youtube;
