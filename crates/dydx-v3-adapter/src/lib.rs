/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public dYdX v3 adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod constants;
pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiError,
    ApiErrorBody,
    ClientConfig,
    DydxClient,
    DydxError,
    HttpMethod,
    RequestInfo,
    Response,
    ResponseInfo,
    Result,
};

// Re-export all types
pub use types::*;
