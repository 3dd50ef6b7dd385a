use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::catalog::CartItem;
use crate::config::ApiConfig;
use crate::purchase::Purchase;

/// Error payload the backend attaches to rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the storefront backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|source| ApiError::ClientBuild { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Add a movie to the session cart. Returns the new cart size.
    pub async fn add_to_cart(&self, item: &CartItem) -> Result<u32, ApiError> {
        let url = format!("{}/api/cart/add", self.base_url);
        let response = self
            .client
            .post(url)
            .query(item)
            .send()
            .await
            .map_err(unreachable_err)?;
        read_cart_size(response).await
    }

    /// Remove a movie from the cart. Returns the new cart size.
    pub async fn remove_from_cart(&self, movie_id: u64) -> Result<u32, ApiError> {
        let url = format!("{}/api/cart/remove", self.base_url);
        let response = self
            .client
            .post(url)
            .query(&[("movieId", movie_id)])
            .send()
            .await
            .map_err(unreachable_err)?;
        read_cart_size(response).await
    }

    /// Fetch the authoritative cart size.
    pub async fn cart_size(&self) -> Result<u32, ApiError> {
        let url = format!("{}/api/cart/size", self.base_url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(unreachable_err)?;
        read_cart_size(response).await
    }

    /// Submit a purchase. The endpoint binds the fields from query-style
    /// parameters; a 2xx answer means the purchase was recorded.
    pub async fn submit_purchase(&self, purchase: &Purchase) -> Result<(), ApiError> {
        let url = format!("{}/api/purchase", self.base_url);
        let response = self
            .client
            .post(url)
            .query(purchase)
            .send()
            .await
            .map_err(unreachable_err)?;

        if response.status().is_success() {
            tracing::info!(email = %purchase.email, "Purchase accepted");
            Ok(())
        } else {
            let err = rejection(response).await;
            tracing::warn!(error = %err, "Purchase rejected");
            Err(err)
        }
    }
}

/// Classify a non-success response, pulling the server's `message` out of
/// the error body when it sent one.
async fn rejection(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let detail = response
        .bytes()
        .await
        .ok()
        .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
        .and_then(|body| body.message);
    ApiError::Rejected { status, detail }
}

async fn read_cart_size(response: Response) -> Result<u32, ApiError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }
    response
        .json::<u32>()
        .await
        .map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn unreachable_err(source: reqwest::Error) -> ApiError {
    ApiError::Unreachable { source }
}
