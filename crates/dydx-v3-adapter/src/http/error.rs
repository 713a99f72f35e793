/*
[INPUT]:  Error sources (non-2xx responses, transport, serialization, query encoding)
[OUTPUT]: Structured error types carrying status, body and request context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use super::request::HttpMethod;

/// Main error type for the dYdX adapter
#[derive(Error, Debug)]
pub enum DydxError {
    /// API returned a non-2xx response
    #[error("{0}")]
    Api(Box<ApiError>),

    /// HTTP transport failed (connection, TLS, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Query parameters could not be form-encoded
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ApiError> for DydxError {
    fn from(err: ApiError) -> Self {
        DydxError::Api(Box::new(err))
    }
}

impl DydxError {
    /// Check if the server rejected the request with a non-2xx status
    pub fn is_api_error(&self) -> bool {
        matches!(self, DydxError::Api(_))
    }

    /// Check if the failure happened below the application layer
    pub fn is_transport_error(&self) -> bool {
        matches!(self, DydxError::Http(_))
    }

    /// Borrow the API error, if this is one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            DydxError::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of an API error
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|err| err.status_code)
    }
}

/// Body of a rejected response: parsed JSON, or the raw text when it is not JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    Json(Value),
    Text(String),
}

impl ApiErrorBody {
    /// Parse JSON, falling back to the raw (lossy UTF-8) text.
    pub fn from_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(value) => ApiErrorBody::Json(value),
            Err(_) => ApiErrorBody::Text(String::from_utf8_lossy(body).into_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiErrorBody::Json(value) => Some(value),
            ApiErrorBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiErrorBody::Json(_) => None,
            ApiErrorBody::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorBody::Json(value) => write!(f, "{value}"),
            ApiErrorBody::Text(text) => f.write_str(text),
        }
    }
}

/// Descriptor of the response that produced an [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    pub status: u16,
    pub url: Url,
    pub headers: HashMap<String, String>,
}

/// Descriptor of the request that produced an [`ApiError`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
    pub method: HttpMethod,
    pub url: Url,
}

/// A non-2xx response from the dYdX API
#[derive(Error, Debug, Clone, PartialEq)]
#[error("API error (status {status_code}): {msg}")]
pub struct ApiError {
    pub status_code: u16,
    pub msg: ApiErrorBody,
    pub response: ResponseInfo,
    pub request: Option<RequestInfo>,
}

/// Result type alias for dYdX operations
pub type Result<T> = std::result::Result<T, DydxError>;
