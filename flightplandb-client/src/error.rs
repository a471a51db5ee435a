//! Error taxonomy and HTTP status mapping.

use thiserror::Error;

use flightplandb_core::ModelError;

// ============================================================================
// Error taxonomy
// ============================================================================

/// Error type for client operations.
///
/// Validation variants (`InvalidFormat`, `InvalidSortOrder`, `Model`) are
/// produced before any I/O. The HTTP variants carry the numeric status and
/// the service's canonical description; consumers should match on the
/// variant rather than parse messages.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller requested an unsupported export format.
    #[error("'{0}' is not a valid data return format")]
    InvalidFormat(String),

    /// The caller requested an unsupported sort order.
    #[error("'{0}' is not a valid sort order; expected created, updated, popularity or distance")]
    InvalidSortOrder(String),

    /// A domain model rejected a value (enum outside its allow-list).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// HTTP 400: the request was malformed.
    #[error("400: the request could not be understood by the server due to malformed syntax")]
    BadRequest,

    /// HTTP 401: authentication is missing or wrong.
    #[error("401: you are incorrectly authorised and may not make this request")]
    Unauthorized,

    /// HTTP 403: the request is understood but refused.
    #[error("403: the server understood the request, but is refusing to fulfill it")]
    Forbidden,

    /// HTTP 404: nothing matches the request URI.
    #[error("404: the server has not found anything matching the Request-URI")]
    NotFound,

    /// HTTP 429: the request limit has been exceeded.
    #[error("429: your request limit for the server has been exceeded")]
    TooManyRequests,

    /// HTTP 500: the server failed to fulfill the request.
    #[error("500: the server encountered an unexpected condition which prevented it from fulfilling the request")]
    InternalServer,

    /// Any other status in the error range.
    #[error("unrecognized error status {0}")]
    UnrecognizedStatus(u16),

    /// The underlying HTTP transport failed.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A base URL or path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The operation requires authentication but the client has no API key.
    #[error("this operation requires an API key")]
    MissingApiKey,

    /// The plan has no id yet; it must be created before it can be edited.
    #[error("plan has no id; create it first")]
    MissingPlanId,

    /// An expected response header was absent or malformed.
    #[error("missing or malformed {0} response header")]
    MissingHeader(&'static str),
}

impl Error {
    /// The HTTP status this error maps to, where applicable.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest => Some(400),
            Error::Unauthorized => Some(401),
            Error::Forbidden => Some(403),
            Error::NotFound => Some(404),
            Error::TooManyRequests => Some(429),
            Error::InternalServer => Some(500),
            Error::UnrecognizedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

// ============================================================================
// Status mapping
// ============================================================================

/// Maps an HTTP status code to a typed error unless the caller declared it
/// acceptable.
///
/// Runs immediately after every transport call, including each page fetched
/// during pagination, before any body parsing. `ignored` is a caller-local
/// override for a single call, e.g. tolerating 404 on a like-status probe.
///
/// # Errors
///
/// Returns the mapped error for any status `>= 400` not listed in `ignored`.
pub fn check_status(status: u16, ignored: &[u16]) -> Result<(), Error> {
    if status < 400 || ignored.contains(&status) {
        return Ok(());
    }
    Err(match status {
        400 => Error::BadRequest,
        401 => Error::Unauthorized,
        403 => Error::Forbidden,
        404 => Error::NotFound,
        429 => Error::TooManyRequests,
        500 => Error::InternalServer,
        other => Error::UnrecognizedStatus(other),
    })
}

// ============================================================================
// Tests
// ============================================================================
