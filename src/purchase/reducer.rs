//! Reducer for the purchase store.

use crate::store::Reducer;

use super::action::{PurchaseAction, PurchaseField};
use super::state::PurchaseState;

/// Reducer for checkout-form state transitions.
pub struct PurchaseReducer;

impl Reducer for PurchaseReducer {
    type State = PurchaseState;
    type Action = PurchaseAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            PurchaseAction::ResetForm => PurchaseState::default(),

            PurchaseAction::ChangeInput { field, value } => {
                let mut next = state;
                match field {
                    PurchaseField::FirstName => next.first_name = value,
                    PurchaseField::LastName => next.last_name = value,
                    PurchaseField::Email => next.email = value,
                }
                next
            }

            // Fields and message clear immediately; the status message
            // arrives later via Settled once the request finishes.
            PurchaseAction::Submit => PurchaseState::default(),

            PurchaseAction::Settled { outcome } => PurchaseState {
                message: outcome.message(),
                ..state
            },
        }
    }
}
