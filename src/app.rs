//! Session object wiring the stores to the backend API.

use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError};
use crate::catalog::{CartItem, Movie};
use crate::config::Config;
use crate::purchase::{PurchaseAction, PurchaseReducer, PurchaseState, SubmitOutcome};
use crate::search::{SearchAction, SearchReducer, SearchState};
use crate::store::Reducer;

/// Outcome of one purchase submission, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCompletion {
    pub seq: u64,
    pub outcome: SubmitOutcome,
}

/// Generic store dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_store {
    ($self:expr, $field:ident, $reducer:ty, $action:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $action);
    };
}

/// One storefront session: the search and purchase stores plus the API
/// client.
///
/// Reducers stay pure. Every side effect (cart calls, purchase submission)
/// runs here, and asynchronous outcomes re-enter the purchase store as
/// [`PurchaseAction::Settled`] once the caller drains the completion
/// channel.
///
/// Submissions are not serialized: a rapid double-submit produces two
/// in-flight requests. Each carries a sequence number, and
/// [`App::apply_completion`] drops any completion older than the latest
/// submit, so only the newest submission can set the status message.
pub struct App {
    search: SearchState,
    purchase: PurchaseState,
    api: ApiClient,
    completion_tx: mpsc::UnboundedSender<SubmitCompletion>,
    completion_rx: mpsc::UnboundedReceiver<SubmitCompletion>,
    /// Sequence number of the most recent submission.
    submit_seq: u64,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::with_client(ApiClient::new(&config.api)?))
    }

    pub fn with_client(api: ApiClient) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            search: SearchState::default(),
            purchase: PurchaseState::default(),
            api,
            completion_tx,
            completion_rx,
            submit_seq: 0,
        }
    }

    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    pub fn purchase_state(&self) -> &PurchaseState {
        &self.purchase
    }

    pub fn dispatch_search(&mut self, action: SearchAction) {
        dispatch_store!(self, search, SearchReducer, action);
    }

    pub fn dispatch_purchase(&mut self, action: PurchaseAction) {
        dispatch_store!(self, purchase, PurchaseReducer, action);
    }

    /// Submit the current checkout form.
    ///
    /// The form fields clear immediately; the status message arrives later
    /// through the completion channel once the request settles. Returns the
    /// sequence number assigned to this submission.
    pub fn submit_purchase(&mut self) -> u64 {
        let purchase = self.purchase.to_purchase();
        self.submit_seq += 1;
        let seq = self.submit_seq;
        self.dispatch_purchase(PurchaseAction::Submit);

        let api = self.api.clone();
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            tracing::info!(seq, "Submitting purchase");
            let outcome = settle(api.submit_purchase(&purchase).await);
            // Receiver lives as long as the App; a send failure just means
            // the session is gone.
            let _ = tx.send(SubmitCompletion { seq, outcome });
        });
        seq
    }

    /// Wait for the next settled submission.
    pub async fn next_completion(&mut self) -> Option<SubmitCompletion> {
        self.completion_rx.recv().await
    }

    /// Feed a settled submission into the purchase store.
    ///
    /// Completions from superseded submissions are discarded.
    pub fn apply_completion(&mut self, completion: SubmitCompletion) {
        if completion.seq < self.submit_seq {
            tracing::debug!(
                seq = completion.seq,
                latest = self.submit_seq,
                "Discarding stale submit completion"
            );
            return;
        }
        self.dispatch_purchase(PurchaseAction::Settled {
            outcome: completion.outcome,
        });
    }

    /// Add a movie to the cart: optimistic badge bump first, then sync with
    /// the size reported by the server.
    ///
    /// On error the optimistic increment is left in place and the error is
    /// returned; call [`App::refresh_cart_size`] to resynchronize.
    pub async fn add_to_cart(&mut self, movie: &Movie) -> Result<u32, ApiError> {
        self.dispatch_search(SearchAction::IncreaseCartSize);
        match self.api.add_to_cart(&CartItem::from(movie)).await {
            Ok(cart_size) => {
                self.dispatch_search(SearchAction::SyncCartSize { cart_size });
                Ok(cart_size)
            }
            Err(err) => {
                tracing::warn!(movie_id = movie.id, error = %err, "Cart add failed");
                Err(err)
            }
        }
    }

    /// Remove a movie from the cart and sync the reported size.
    pub async fn remove_from_cart(&mut self, movie_id: u64) -> Result<u32, ApiError> {
        let cart_size = self.api.remove_from_cart(movie_id).await?;
        self.dispatch_search(SearchAction::SyncCartSize { cart_size });
        Ok(cart_size)
    }

    /// Fetch the authoritative cart size and sync the badge.
    pub async fn refresh_cart_size(&mut self) -> Result<u32, ApiError> {
        let cart_size = self.api.cart_size().await?;
        self.dispatch_search(SearchAction::SyncCartSize { cart_size });
        Ok(cart_size)
    }
}

fn settle(result: Result<(), ApiError>) -> SubmitOutcome {
    match result {
        Ok(()) => SubmitOutcome::Accepted,
        Err(ApiError::Rejected { status, detail }) => SubmitOutcome::Rejected { status, detail },
        Err(err) => {
            tracing::warn!(error = %err, "Purchase submission got no response");
            SubmitOutcome::Unreachable
        }
    }
}
