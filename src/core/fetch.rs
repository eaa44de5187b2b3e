use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::core::query::ResourceRequest;
use crate::domain::ports::ContentSource;

/// Expected JSON type of the envelope's `data` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Object => f.write_str("an object"),
            Shape::Array => f.write_str("an array"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Failed to fetch {resource} (HTTP {status})")]
    Status { resource: String, status: u16 },

    #[error("Failed to reach the content server for {resource}: {message}")]
    Transport { resource: String, message: String },

    #[error("Invalid response body for {resource}: {message}")]
    Decode { resource: String, message: String },

    #[error("Unexpected API response structure for {resource}: expected {expected} in `data`")]
    Shape { resource: String, expected: Shape },

    #[error("No {resource} found for '{key}'")]
    NotFound { resource: String, key: String },

    #[error("Invalid content server address: {0}")]
    InvalidBaseUrl(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Pulls `data` out of a `{ data: ... }` envelope, checking its JSON type.
pub fn unwrap_envelope(resource: &str, body: Value, expected: Shape) -> Result<Value, FetchError> {
    let data = match body {
        Value::Object(mut envelope) => envelope.remove("data"),
        _ => None,
    };

    match (data, expected) {
        (Some(data @ Value::Object(_)), Shape::Object) => Ok(data),
        (Some(data @ Value::Array(_)), Shape::Array) => Ok(data),
        _ => Err(FetchError::Shape {
            resource: resource.to_string(),
            expected,
        }),
    }
}

fn decode<T: DeserializeOwned>(resource: &str, data: Value) -> Result<T, FetchError> {
    serde_json::from_value(data).map_err(|e| FetchError::Decode {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

/// Fetches a single entity; `data` must be an object.
pub async fn fetch_one<T: DeserializeOwned>(
    source: &dyn ContentSource,
    request: &ResourceRequest,
) -> Result<T, FetchError> {
    let body = source.get_json(request).await?;
    let data = unwrap_envelope(request.resource(), body, Shape::Object)?;
    decode(request.resource(), data)
}

/// Fetches a collection; `data` must be an array. Order is preserved.
pub async fn fetch_many<T: DeserializeOwned>(
    source: &dyn ContentSource,
    request: &ResourceRequest,
) -> Result<Vec<T>, FetchError> {
    let body = source.get_json(request).await?;
    let data = unwrap_envelope(request.resource(), body, Shape::Array)?;
    decode(request.resource(), data)
}

/// Fetches a filtered collection and keeps its first element. Used where a
/// route is keyed by a business identifier instead of the document id.
pub async fn fetch_first<T: DeserializeOwned>(
    source: &dyn ContentSource,
    request: &ResourceRequest,
    key: &str,
) -> Result<T, FetchError> {
    let items: Vec<T> = fetch_many(source, request).await?;
    items.into_iter().next().ok_or_else(|| FetchError::NotFound {
        resource: request.resource().to_string(),
        key: key.to_string(),
    })
}
