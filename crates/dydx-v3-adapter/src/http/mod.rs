/*
[INPUT]:  Host, injected HTTP session and endpoint parameters
[OUTPUT]: Normalized JSON responses and structured API errors
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod query;
pub mod request;
pub mod response;

pub use error::{ApiError, ApiErrorBody, DydxError, RequestInfo, ResponseInfo, Result};
pub use query::generate_query_path;
pub use request::{HttpMethod, USER_AGENT, request};
pub use response::Response;

pub use client::{ClientConfig, DydxClient};
