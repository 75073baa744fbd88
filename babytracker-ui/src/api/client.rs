//! HTTP API Client
//!
//! Browser transport for the Baby Tracker REST API.

use async_trait::async_trait;
use babytracker::transport::{normalize_base, RequestError, Transport};
use gloo_net::http::Request;
use serde_json::Value;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Local storage key holding an API base URL override
const API_URL_KEY: &str = "babytracker_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

/// Transport over the browser's fetch API
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    /// Transport for the configured API base
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn network_error(err: gloo_net::Error) -> RequestError {
    RequestError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn fetch_json(&self, path: &str) -> Result<Value, RequestError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            return Err(RequestError::read_failed(path, response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        let response = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| RequestError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;

        if !response.ok() {
            let text = response.text().await.unwrap_or_default();
            return Err(RequestError::write_failed(path, response.status(), &text));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}
