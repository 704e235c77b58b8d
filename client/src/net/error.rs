//! Typed failures for calls to the summarization service.
//!
//! ERROR HANDLING
//! ==============
//! The submission view turns these into user-facing text via
//! [`ApiError::user_message`]; the history view only logs them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single HTTP exchange with the summarization service.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The body could not be decoded as the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The service answered successfully but returned no usable content.
    #[error("empty response content")]
    EmptyContent,
    /// Called outside the browser (server render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message shown in the submission view's error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::EmptyContent => {
                "The service returned an empty summary. Try a different document or prompt.".to_owned()
            }
            ApiError::Status(status) => {
                format!("Summarization failed (HTTP {status}). Please try again.")
            }
            ApiError::Network(_) | ApiError::Unavailable => {
                "Could not reach the summarization service. Check your connection and try again.".to_owned()
            }
            ApiError::Decode(_) => "The summarization service sent a response we could not read.".to_owned(),
        }
    }
}
