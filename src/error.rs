use std::time::Duration;

use thiserror::Error;

/// Why a market-data lookup could not be completed. Every variant is recoverable
/// and carries a cause that can be shown to the user as-is.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("stock symbol must not be empty")]
    EmptySymbol,
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("provider error: {0}")]
    Provider(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    /// The provider turned down the session (e.g. a stale crumb) rather than
    /// failing to answer.
    pub fn is_auth_refusal(&self) -> bool {
        matches!(self, FetchError::Status { status: 401 | 403, .. })
    }

    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            FetchError::Timeout(timeout)
        } else if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}
