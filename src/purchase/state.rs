//! State for the purchase store.

use serde::Serialize;

use crate::store::StoreState;

/// Status line shown after a purchase settles successfully.
pub const PURCHASE_SUCCESS_MESSAGE: &str = "Purchase completed successfully!";

/// Prefix for server-side rejections; the server's detail is appended
/// when it sent one.
pub const PURCHASE_FAILURE_PREFIX: &str = "Purchase failed: ";

/// Status line when no response was received at all.
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Server unreachable, please try again later";

/// Checkout payload, in the parameter shape the purchase endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// How a submitted purchase settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The purchase endpoint answered 2xx.
    Accepted,
    /// Non-2xx response; `detail` carries the server's message when present.
    Rejected { status: u16, detail: Option<String> },
    /// No response was received.
    Unreachable,
}

impl SubmitOutcome {
    /// Status text surfaced to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Accepted => PURCHASE_SUCCESS_MESSAGE.to_string(),
            Self::Rejected {
                detail: Some(detail),
                ..
            } => format!("{PURCHASE_FAILURE_PREFIX}{detail}"),
            Self::Rejected {
                status,
                detail: None,
            } => format!("{PURCHASE_FAILURE_PREFIX}request failed with status {status}"),
            Self::Unreachable => SERVER_UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// State of the checkout form and its one-shot status message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PurchaseState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Transient status text; empty until a submission settles.
    pub message: String,
}

impl StoreState for PurchaseState {}

impl PurchaseState {
    /// Snapshot the form fields as a submission payload.
    ///
    /// Call this before dispatching [`super::PurchaseAction::Submit`], which
    /// clears the fields.
    pub fn to_purchase(&self) -> Purchase {
        Purchase {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }

    /// Whether a status message is pending display.
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}
