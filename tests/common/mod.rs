//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use cinecart::api::ApiClient;
use cinecart::app::App;
use cinecart::config::{ApiConfig, Config};

/// Build a config pointing at the given backend base URL.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            connect_timeout_seconds: 2,
            request_timeout_seconds: 5,
        },
    }
}

/// Build an `App` wired to the given backend base URL.
pub fn make_app(base_url: &str) -> App {
    let config = test_config(base_url);
    let api = ApiClient::new(&config.api).expect("Failed to build API client");
    App::with_client(api)
}
