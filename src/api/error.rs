//! API error types

use reqwest::StatusCode;

/// Errors returned by `DogApi` calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 401 from the service: the session cookie is missing or expired
    #[error("session expired")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("unexpected status {0}")]
    Status(StatusCode),

    /// Connection, timeout, or other transport failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("invalid response body: {0}")]
    Decode(reqwest::Error),

    #[error("invalid request url: {0}")]
    InvalidUrl(String),
}
