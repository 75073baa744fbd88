//! Transport
//!
//! The seam between the workflows and the Baby Tracker REST API.
//!
//! A [`Transport`] knows two verbs, fetch-JSON and post-JSON, relative to a
//! base URL. The typed operations in this module ([`list`], [`create`],
//! [`get`]) sit on top and map record kinds to their collection paths.
//!
//! Every call is a single attempt: no retries and no timeouts.

mod error;
#[cfg(feature = "native")]
mod http;
#[cfg(test)]
pub(crate) mod memory;

pub use error::RequestError;
#[cfg(feature = "native")]
pub use http::HttpTransport;

use async_trait::async_trait;
use serde_json::Value;

use crate::records::RecordKind;

/// Outbound JSON calls against a base URL.
///
/// Futures are not required to be `Send` so that browser transports fit.
#[async_trait(?Send)]
pub trait Transport {
    /// GET `base + path` and parse the body
    async fn fetch_json(&self, path: &str) -> Result<Value, RequestError>;

    /// POST `body` to `base + path` and parse the response
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError>;
}

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// All records of a kind, in server order.
///
/// Records that do not decode (an unknown type string, a missing field) are
/// skipped with a warning. Only a body that is not a list fails the call.
pub async fn list<K, T>(transport: &T) -> Result<Vec<K>, RequestError>
where
    K: RecordKind,
    T: Transport + ?Sized,
{
    let body = transport.fetch_json(K::COLLECTION).await?;
    let items: Vec<Value> = serde_json::from_value(body)?;

    let records = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<K>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection = K::COLLECTION, error = %e, "Skipping undecodable record");
                None
            }
        })
        .collect();

    Ok(records)
}

/// Create a record and return it as stored by the server
pub async fn create<K, T>(transport: &T, record: &K) -> Result<K, RequestError>
where
    K: RecordKind,
    T: Transport + ?Sized,
{
    let body = serde_json::to_value(record)?;
    tracing::info!(collection = K::COLLECTION, "Creating record");
    let created = transport.post_json(K::COLLECTION, &body).await?;
    Ok(serde_json::from_value(created)?)
}

/// A single record by its server-assigned id
pub async fn get<K, T>(transport: &T, id: u64) -> Result<K, RequestError>
where
    K: RecordKind,
    T: Transport + ?Sized,
{
    let body = transport
        .fetch_json(&format!("{}/{}", K::COLLECTION, id))
        .await?;
    Ok(serde_json::from_value(body)?)
}
