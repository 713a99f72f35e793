/*
[INPUT]:  Session, absolute URI, verb, extra headers and optional JSON body
[OUTPUT]: Normalized response from a single HTTP round trip
[POS]:    HTTP layer - request execution with the fixed core headers
[UPDATE]: When changing default headers or body encoding
*/

use std::fmt;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::error::{RequestInfo, Result};
use super::response::Response;

/// User-Agent sent with every request
pub const USER_AGENT: &str = "dydx/rust";

/// HTTP verbs used by the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Method::from(*self).as_str())
    }
}

/// Headers attached to every request before caller headers are merged.
pub fn core_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));
    headers
}

/// Core headers overlaid with `extra`; a key present in `extra` replaces the default.
pub fn merge_headers(extra: Option<&HeaderMap>) -> HeaderMap {
    let mut headers = core_headers();
    if let Some(extra) = extra {
        for name in extra.keys() {
            headers.remove(name);
        }
        for (name, value) in extra {
            headers.append(name.clone(), value.clone());
        }
    }
    headers
}

/// Serialize `body` as JSON, dropping top-level `null` entries.
pub fn encode_body<B>(body: &B) -> Result<Vec<u8>>
where
    B: Serialize + ?Sized,
{
    let value = match serde_json::to_value(body)? {
        Value::Object(mut map) => {
            map.retain(|_, v| !v.is_null());
            Value::Object(map)
        }
        other => other,
    };
    Ok(serde_json::to_vec(&value)?)
}

/// Issue one request over `session` and normalize the outcome.
///
/// GET requests never carry a body. Transport errors are returned as
/// [`DydxError::Http`](super::DydxError::Http) unchanged; non-2xx statuses
/// become [`DydxError::Api`](super::DydxError::Api).
pub async fn request<B>(
    session: &Client,
    uri: &str,
    method: HttpMethod,
    headers: Option<&HeaderMap>,
    body: Option<&B>,
) -> Result<Response>
where
    B: Serialize + ?Sized,
{
    let url = Url::parse(uri)?;
    let body = match body {
        Some(body) if method != HttpMethod::Get => Some(encode_body(body)?),
        _ => None,
    };

    debug!(%method, %url, "sending request");

    let mut builder = session
        .request(method.into(), url.clone())
        .headers(merge_headers(headers));
    if let Some(body) = body {
        builder = builder.body(body);
    }
    let raw = builder.send().await?;

    debug!(%method, %url, status = raw.status().as_u16(), "received response");

    Response::from_raw(raw, Some(RequestInfo { method, url })).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderName};
    use serde_json::json;

    #[test]
    fn test_core_headers() {
        let headers = core_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get(USER_AGENT_HEADER).unwrap(), USER_AGENT);
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let mut extra = HeaderMap::new();
        extra.insert(USER_AGENT_HEADER, HeaderValue::from_static("my-bot/1.0"));
        extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        let headers = merge_headers(Some(&extra));
        let agents: Vec<_> = headers.get_all(USER_AGENT_HEADER).iter().collect();
        assert_eq!(agents, vec!["my-bot/1.0"]);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_no_extra_headers() {
        assert_eq!(merge_headers(None), core_headers());
        assert_eq!(merge_headers(Some(&HeaderMap::new())), core_headers());
        assert!(!merge_headers(None).contains_key(HeaderName::from_static("x-custom")));
    }

    #[test]
    fn test_encode_body_drops_top_level_nulls() {
        let body = json!({"token": "abc", "referrer": null, "nested": {"keep": null}});
        let encoded = encode_body(&body).unwrap();
        let decoded: Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, json!({"token": "abc", "nested": {"keep": null}}));
    }

    #[test]
    fn test_encode_body_keeps_empty_strings() {
        let encoded = encode_body(&json!({"token": ""})).unwrap();
        assert_eq!(encoded, br#"{"token":""}"#);
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(Method::from(HttpMethod::Get), Method::GET);
        assert_eq!(Method::from(HttpMethod::Put), Method::PUT);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
