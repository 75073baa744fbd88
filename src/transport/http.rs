//! Native HTTP transport built on reqwest

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{normalize_base, RequestError, Transport};

/// Talks to the Baby Tracker API over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the API rooted at `base_url`, e.g. `http://localhost:8080/api`
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: normalize_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn network_error(err: reqwest::Error) -> RequestError {
    RequestError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn fetch_json(&self, path: &str) -> Result<Value, RequestError> {
        tracing::debug!(path, "GET");

        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::read_failed(path, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        tracing::debug!(path, "POST");

        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RequestError::write_failed(path, status.as_u16(), &text));
        }

        response
            .json()
            .await
            .map_err(|e| RequestError::Decode(e.to_string()))
    }
}
