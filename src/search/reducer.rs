//! Reducer for the search store.

use crate::store::Reducer;

use super::action::{SearchAction, SearchField};
use super::state::SearchState;

/// Reducer for search form, history, and cart-badge transitions.
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Action = SearchAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            SearchAction::ChangeInput { field, value } => {
                let mut next = state;
                match field {
                    SearchField::SearchString => next.search_string = value,
                    SearchField::ReleaseYear => next.release_year = value,
                }
                next
            }

            SearchAction::LoadGenres { genres } => SearchState { genres, ..state },

            SearchAction::AddGenre { genre } => {
                let mut next = state;
                next.selected_genres.push(genre);
                next
            }

            SearchAction::Search => {
                if state.history_contains_current() || state.is_search_empty() {
                    // Known or empty search: commit the value, record nothing.
                    SearchState {
                        submit_value: state.search_string.clone(),
                        show_search_history: false,
                        ..state
                    }
                } else {
                    let entry = state.current_entry();
                    let mut next = state;
                    next.submit_value = next.search_string.clone();
                    next.show_search_history = false;
                    next.search_history.push(entry);
                    next.selected_genres.clear();
                    next
                }
            }

            SearchAction::SearchAgain { entry } => {
                let selected_genres = state.resolve_genres(&entry.selected_genres);
                SearchState {
                    submit_value: entry.search_string,
                    selected_genres,
                    release_year: entry.release_year,
                    show_search_history: false,
                    ..state
                }
            }

            SearchAction::ToggleSearchHistory => SearchState {
                show_search_history: !state.show_search_history,
                ..state
            },

            SearchAction::DeleteSearch { index } => {
                if index >= state.search_history.len() {
                    return state;
                }
                let mut next = state;
                next.search_history.remove(index);
                next
            }

            SearchAction::ClearHistory => SearchState {
                search_history: Vec::new(),
                ..state
            },

            SearchAction::SyncCartSize { cart_size } => SearchState { cart_size, ..state },

            SearchAction::IncreaseCartSize => SearchState {
                cart_size: state.cart_size.saturating_add(1),
                ..state
            },
        }
    }
}
