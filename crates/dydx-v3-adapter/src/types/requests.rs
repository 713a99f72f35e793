/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of PUT /v3/emails/verify-email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}
