/*
[INPUT]:  API host and either a ClientConfig or an existing reqwest session
[OUTPUT]: DydxClient ready for public API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;

use super::error::{DydxError, Result};
use super::query::generate_query_path;
use super::request::{HttpMethod, request};
use super::response::Response;

/// Session configuration used when the caller does not inject one
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the dYdX v3 public API.
///
/// The session is shared, never closed here: cloning a `reqwest::Client`
/// reuses its connection pool, so the caller keeps control of its lifetime.
#[derive(Debug, Clone)]
pub struct DydxClient {
    session: Client,
    host: String,
}

impl DydxClient {
    /// Create a new client with a session built from the default configuration
    pub fn new(host: &str) -> Result<Self> {
        Self::with_config(host, ClientConfig::default())
    }

    /// Create a new client with a session built from `config`
    pub fn with_config(host: &str, config: ClientConfig) -> Result<Self> {
        let session = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| DydxError::Config(format!("Failed to build HTTP session: {e}")))?;

        Self::with_session(host, session)
    }

    /// Create a new client over an externally owned session
    pub fn with_session(host: &str, session: Client) -> Result<Self> {
        Url::parse(host)?;
        Ok(Self {
            session,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    /// API host without a trailing slash
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The injected session
    pub fn session(&self) -> &Client {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.host, path)
    }

    /// GET `path` with no query string
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        request::<()>(&self.session, &self.url(path), HttpMethod::Get, None, None).await
    }

    /// GET `path` with `params` encoded into the query string
    pub(crate) async fn get_with_params<P>(&self, path: &str, params: &P) -> Result<Response>
    where
        P: Serialize + ?Sized,
    {
        let uri = generate_query_path(&self.url(path), params)?;
        request::<()>(&self.session, &uri, HttpMethod::Get, None, None).await
    }

    /// PUT a JSON body to `/v3/{endpoint}`
    pub(crate) async fn put<B>(&self, endpoint: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let uri = self.url(&format!("/v3/{endpoint}"));
        request(&self.session, &uri, HttpMethod::Put, None, Some(body)).await
    }
}
