//! Error type shared by every backend call.

use thiserror::Error;

/// Failure of a single backend request.
///
/// `Rejected` carries the message from the response body's `error` field
/// when the backend supplied one; callers fall back to their own generic
/// text when it is absent. `Transport` covers everything that prevented a
/// decodable answer from arriving at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{}", message.as_deref().unwrap_or("request rejected"))]
    Rejected { message: Option<String> },

    /// The request never completed, or the body was not decodable JSON.
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
