//! Error body returned by the registry for failed requests.
//!
//! This is the wire shape only. The client crate turns it into its own error
//! type together with the HTTP status.

use serde::{Deserialize, Serialize};

use crate::nullable::null_as_default;

/// The body of a non-2xx registry response: `{"message": ..., "errors": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// Summary message, e.g. `"404 Module not found"`.
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Individual error details, e.g. `["Module not found"]`.
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<String>,
}
