//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The configured root key was missing from a page body.
    #[error("Invalid root value specified: {0}")]
    InvalidRoot(String),

    /// Negative index or slice bound, or an index past the end of a
    /// fully-loaded collection.
    #[error("Index out of range: {0}")]
    IndexOutOfRange(String),

    /// A page body that is neither an array nor an object.
    #[error("Unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// Every non-success status is classified here, so callers never look at raw
/// status codes.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 401 carrying a `WWW-Authenticate` challenge: the token itself is bad.
    #[error("Invalid access token: {0}")]
    InvalidAccessToken(String),

    /// 401 without a challenge: the token is fine but lacks permission.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable entity: {0}")]
    Unprocessable(String),

    #[error("Encountered an error: status code {status}")]
    Status { status: u16, body: String },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl HttpError {
    /// Classify a non-success status.
    ///
    /// Returns `None` for 2xx. Informational and redirect statuses that
    /// reach this point fall into `Status`.
    pub fn from_status(status: u16, has_auth_challenge: bool, body: String) -> Option<Self> {
        let err = match status {
            200..=299 => return None,
            400 => HttpError::BadRequest(body),
            401 if has_auth_challenge => HttpError::InvalidAccessToken(body),
            401 => HttpError::Unauthorized(body),
            403 => HttpError::Forbidden(body),
            404 => HttpError::NotFound(body),
            409 => HttpError::Conflict(body),
            422 => HttpError::Unprocessable(body),
            _ => HttpError::Status { status, body },
        };
        Some(err)
    }

    /// The HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::BadRequest(_) => Some(400),
            HttpError::InvalidAccessToken(_) | HttpError::Unauthorized(_) => Some(401),
            HttpError::Forbidden(_) => Some(403),
            HttpError::NotFound(_) => Some(404),
            HttpError::Conflict(_) => Some(409),
            HttpError::Unprocessable(_) => Some(422),
            HttpError::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::InvalidHeader(_) => None,
        }
    }
}
