/*
[INPUT]:  Raw HTTP response (status, headers, body bytes)
[OUTPUT]: Response {data, headers} or a structured ApiError
[POS]:    HTTP layer - response normalization
[UPDATE]: When changing success/error response shapes
*/

use std::collections::HashMap;

use reqwest::Url;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::{ApiError, ApiErrorBody, RequestInfo, ResponseInfo, Result};

/// `data` of a successful response whose body was empty.
pub const EMPTY_BODY_DATA: &str = "{}";

/// A successful API response
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub data: Value,
    pub headers: HashMap<String, String>,
}

impl Response {
    /// Read the body of `raw` and normalize it.
    pub async fn from_raw(raw: reqwest::Response, request: Option<RequestInfo>) -> Result<Self> {
        let status = raw.status().as_u16();
        let url = raw.url().clone();
        let headers = header_map(raw.headers());
        let body = raw.bytes().await?;
        normalize(status, url, headers, &body, request)
    }

    /// Deserialize `data` into a typed model.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// True when the server answered 2xx with no body.
    pub fn is_empty_body(&self) -> bool {
        self.data.as_str() == Some(EMPTY_BODY_DATA)
    }
}

/// Flatten response headers; repeated names are joined with `", "`.
pub fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    map
}

/// Turn status, headers and body into a [`Response`] or an [`ApiError`].
///
/// An empty 2xx body yields the string `"{}"` as `data`, not an object.
pub fn normalize(
    status: u16,
    url: Url,
    headers: HashMap<String, String>,
    body: &[u8],
    request: Option<RequestInfo>,
) -> Result<Response> {
    if !(200..300).contains(&status) {
        let msg = ApiErrorBody::from_bytes(body);
        warn!(status, %url, %msg, "dYdX API returned an error");
        return Err(ApiError {
            status_code: status,
            msg,
            response: ResponseInfo {
                status,
                url,
                headers,
            },
            request,
        }
        .into());
    }

    let data = if body.is_empty() {
        Value::String(EMPTY_BODY_DATA.to_string())
    } else {
        serde_json::from_slice(body)?
    };

    Ok(Response { data, headers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{DydxError, HttpMethod};
    use reqwest::header::HeaderValue;
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://api.dydx.exchange/v3/time").unwrap()
    }

    fn headers() -> HashMap<String, String> {
        HashMap::from([("content-type".to_string(), "application/json".to_string())])
    }

    #[test]
    fn test_success_with_body() {
        let body = br#"{"iso":"2021-02-02T18:35:45.000Z","epoch":1612290945.0}"#;
        let response = normalize(200, url(), headers(), body, None).unwrap();
        assert_eq!(
            response.data,
            json!({"iso": "2021-02-02T18:35:45.000Z", "epoch": 1612290945.0})
        );
        assert_eq!(response.headers, headers());
        assert!(!response.is_empty_body());
    }

    #[rstest]
    #[case(200)]
    #[case(201)]
    #[case(204)]
    #[case(299)]
    fn test_empty_success_body_is_literal_braces(#[case] status: u16) {
        let response = normalize(status, url(), headers(), b"", None).unwrap();
        assert_eq!(response.data, Value::String("{}".to_string()));
        assert_ne!(response.data, json!({}));
        assert!(response.is_empty_body());
    }

    #[rstest]
    #[case(100)]
    #[case(302)]
    #[case(400)]
    #[case(404)]
    #[case(429)]
    #[case(500)]
    fn test_non_2xx_is_api_error(#[case] status: u16) {
        let request = RequestInfo {
            method: HttpMethod::Get,
            url: url(),
        };
        let err = normalize(status, url(), headers(), br#"{"errors":[]}"#, Some(request.clone()))
            .unwrap_err();

        let api = err.api_error().expect("api error");
        assert_eq!(api.status_code, status);
        assert_eq!(api.msg, ApiErrorBody::Json(json!({"errors": []})));
        assert_eq!(api.response.status, status);
        assert_eq!(api.response.headers, headers());
        assert_eq!(api.request, Some(request));
    }

    #[test]
    fn test_error_body_falls_back_to_text() {
        let err = normalize(502, url(), HashMap::new(), b"Bad Gateway", None).unwrap_err();
        let api = err.api_error().expect("api error");
        assert_eq!(api.msg, ApiErrorBody::Text("Bad Gateway".to_string()));
        assert!(api.request.is_none());
    }

    #[test]
    fn test_malformed_success_body_is_serialization_error() {
        let err = normalize(200, url(), headers(), b"not json", None).unwrap_err();
        assert!(matches!(err, DydxError::Serialization(_)));
    }

    #[test]
    fn test_typed_view() {
        #[derive(Deserialize)]
        struct Exists {
            exists: bool,
        }

        let response = normalize(200, url(), headers(), br#"{"exists":true}"#, None).unwrap();
        let exists: Exists = response.json().unwrap();
        assert!(exists.exists);
        assert!(response.json::<Vec<u8>>().is_err());
    }

    #[test]
    fn test_header_map_joins_repeated_values() {
        let mut raw = HeaderMap::new();
        raw.append("set-cookie", HeaderValue::from_static("a=1"));
        raw.append("set-cookie", HeaderValue::from_static("b=2"));
        raw.insert("x-ratelimit-remaining", HeaderValue::from_static("99"));

        let map = header_map(&raw);
        assert_eq!(map.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
        assert_eq!(map.get("x-ratelimit-remaining").map(String::as_str), Some("99"));
        assert_eq!(map.len(), 2);
    }
}
