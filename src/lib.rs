//! Client-side state core for a movie storefront.
//!
//! Two independent stores drive the storefront UI: the search store
//! (query form, genre selection, deduplicated search history, cart badge)
//! and the purchase store (checkout form and its status message). Both
//! follow the same unidirectional contract: a pure reducer maps
//! `(state, action)` to a new state, and every side effect lives in the
//! [`app::App`] session object, which feeds asynchronous outcomes back
//! into the stores as actions.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod purchase;
pub mod search;
pub mod store;
