mod action;
mod reducer;
mod state;

pub use action::{SearchAction, SearchField};
pub use reducer::SearchReducer;
pub use state::{SearchEntry, SearchState};
