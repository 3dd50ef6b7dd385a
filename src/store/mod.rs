//! Unidirectional data-flow primitives shared by the storefront stores.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                             │
//!    └─────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a store
//! - **Action**: user input or a backend completion
//! - **Reducer**: pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::StoreState;
