//! The generic status envelope.

use serde::{Deserialize, Serialize};

/// The `{message, errors}` envelope returned by status-only endpoints
/// (ping, revoke, like probes, delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The status message, e.g. `"OK"` or `"Not Found"`.
    pub message: String,
    /// Any errors raised.
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}
