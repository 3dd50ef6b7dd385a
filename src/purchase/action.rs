//! Actions handled by the purchase store.

use crate::store::Action;

use super::state::SubmitOutcome;

/// Text field targeted by [`PurchaseAction::ChangeInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseField {
    FirstName,
    LastName,
    Email,
}

/// Actions dispatched into the purchase store.
#[derive(Debug, Clone)]
pub enum PurchaseAction {
    /// Clear every field and the status message.
    ResetForm,
    /// Live edit of a text field.
    ChangeInput { field: PurchaseField, value: String },
    /// Optimistic transition at submit time: clears the fields and the
    /// message immediately, before the network outcome is known. The
    /// request itself is issued by the session, never by the reducer.
    Submit,
    /// A submission settled; set the status message from the outcome.
    Settled { outcome: SubmitOutcome },
}

impl Action for PurchaseAction {}
