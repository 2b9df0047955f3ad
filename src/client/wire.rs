//! Internal wire types for serde deserialization.
//!
//! These match the raw JSON error envelope Google APIs return and are not
//! exposed publicly.

use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    #[allow(dead_code)]
    pub code: Option<u16>,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
pub(crate) struct ErrorDetail {
    pub reason: Option<String>,
    pub domain: Option<String>,
    pub message: Option<String>,
}
