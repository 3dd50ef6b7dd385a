mod action;
mod reducer;
mod state;

pub use action::{PurchaseAction, PurchaseField};
pub use reducer::PurchaseReducer;
pub use state::{
    Purchase, PurchaseState, SubmitOutcome, PURCHASE_FAILURE_PREFIX, PURCHASE_SUCCESS_MESSAGE,
    SERVER_UNREACHABLE_MESSAGE,
};
