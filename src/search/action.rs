//! Actions handled by the search store.

use crate::catalog::Genre;
use crate::store::Action;

use super::state::SearchEntry;

/// Text field targeted by [`SearchAction::ChangeInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    SearchString,
    ReleaseYear,
}

/// Actions dispatched into the search store.
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// Live edit of a text field.
    ChangeInput { field: SearchField, value: String },
    /// Install the genre catalog fetched from the backend.
    LoadGenres { genres: Vec<Genre> },
    /// Select a genre. No duplicate check: the same genre can be added twice.
    AddGenre { genre: Genre },
    /// Commit the current form values as a search.
    Search,
    /// Re-run a search picked from the history panel.
    SearchAgain { entry: SearchEntry },
    /// Flip the history panel open or closed.
    ToggleSearchHistory,
    /// Remove the history entry at `index`. Out of range is a no-op.
    DeleteSearch { index: usize },
    /// Empty the search history.
    ClearHistory,
    /// Overwrite the cart badge with a server-reported size.
    SyncCartSize { cart_size: u32 },
    /// Optimistic local bump while a cart add is in flight.
    IncreaseCartSize,
}

impl Action for SearchAction {}
