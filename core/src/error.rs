//! Error type for the Houzat API client.
//!
//! # Design
//! Every failure leaving this crate is an `ApiError`, so callers branch on a
//! single type instead of inspecting raw transport errors. The three pieces
//! of the error contract are preserved across all variants: a human-readable
//! message (the `Display` impl), an HTTP status code (`status()`, 0 when the
//! failure never produced a response), and the raw error payload as received
//! (`payload()`, for diagnostics).

use thiserror::Error;

/// Errors returned by `HouzatClient` parse methods and the executing
/// transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` prefers the envelope's `message` field, then `error`, then
    /// a generic fallback. `payload` is the response body as parsed JSON, or
    /// a synthesized envelope when the body was not JSON.
    #[error("{message}")]
    Http {
        message: String,
        status: u16,
        payload: serde_json::Value,
    },

    /// The HTTP round-trip itself failed: DNS, connection refused, timeout.
    /// No response was received, so `status()` reports 0.
    #[error("{0}")]
    Network(String),

    /// A 2xx body could not be decoded into the expected envelope shape.
    /// Also reported with status 0 to distinguish it from a server error.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code of the failed response, or 0 when the failure
    /// happened before a response existed.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Http { status, .. } => *status,
            ApiError::Network(_) | ApiError::Decode(_) => 0,
        }
    }

    /// Raw error payload for diagnostics. Only HTTP errors carry one.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }
}
