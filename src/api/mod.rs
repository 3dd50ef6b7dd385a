//! HTTP client for the storefront backend.
//!
//! The backend is an external collaborator: a cart endpoint (add/remove an
//! item, report the cart size) and a purchase endpoint (accept the checkout
//! form). Both take their parameters query-style and answer with small JSON
//! bodies.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
