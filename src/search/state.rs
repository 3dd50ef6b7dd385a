//! State for the search store.

use serde::{Deserialize, Serialize};

use crate::catalog::Genre;
use crate::store::StoreState;

/// A persisted record of a prior search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub search_string: String,
    /// Genre names in selection order.
    pub selected_genres: Vec<String>,
    pub release_year: String,
}

impl SearchEntry {
    /// Positional comparison against a (string, year, genre-name) triple.
    /// Genre order matters: the same genres selected in a different order
    /// do not match.
    fn matches(&self, search_string: &str, release_year: &str, genre_names: &[String]) -> bool {
        self.search_string == search_string
            && self.release_year == release_year
            && self.selected_genres == genre_names
    }
}

/// State of the search form, history panel, and cart badge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Live-typed query text.
    pub search_string: String,
    /// Available genres, loaded from the catalog API.
    pub genres: Vec<Genre>,
    /// Genres chosen for the current query, selection order preserved.
    /// Duplicates are permitted.
    pub selected_genres: Vec<Genre>,
    /// Optional year filter, empty when unset.
    pub release_year: String,
    /// Last committed search string (distinct from the live-typed value).
    pub submit_value: String,
    /// Whether the history panel is open.
    pub show_search_history: bool,
    /// Past searches, oldest first.
    pub search_history: Vec<SearchEntry>,
    /// Item count shown on the cart badge.
    pub cart_size: u32,
}

impl StoreState for SearchState {}

impl SearchState {
    /// Names of the currently selected genres, in selection order.
    pub fn selected_genre_names(&self) -> Vec<String> {
        self.selected_genres.iter().map(|g| g.name.clone()).collect()
    }

    /// Derive the history entry for the current form values.
    pub fn current_entry(&self) -> SearchEntry {
        SearchEntry {
            search_string: self.search_string.clone(),
            selected_genres: self.selected_genre_names(),
            release_year: self.release_year.clone(),
        }
    }

    /// True when string, year, and genre selection are all blank.
    pub fn is_search_empty(&self) -> bool {
        self.search_string.is_empty()
            && self.release_year.is_empty()
            && self.selected_genres.is_empty()
    }

    /// True when the current triple already exists in the history.
    pub fn history_contains_current(&self) -> bool {
        let names = self.selected_genre_names();
        self.search_history
            .iter()
            .any(|entry| entry.matches(&self.search_string, &self.release_year, &names))
    }

    /// Resolve stored genre names back to catalog records, preserving entry
    /// order. Names missing from the catalog are dropped.
    pub fn resolve_genres(&self, names: &[String]) -> Vec<Genre> {
        names
            .iter()
            .filter_map(|name| self.genres.iter().find(|g| &g.name == name).cloned())
            .collect()
    }
}
