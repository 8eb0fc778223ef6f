/// Error types for talking to the recommendation service
use thiserror::Error;

/// Why a recommendation fetch failed. Callers show the same notification for
/// every variant; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Connection, TLS or body-read failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("Recommendation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but breaks a response invariant
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
