use reqwest::StatusCode;
use thiserror::Error;

/// The one way a search can fail. Callers get no finer classification; the
/// cause is kept for logs.
#[derive(Debug, Error)]
#[error("failed to fetch order data: {cause}")]
pub struct FetchError {
    cause: Cause,
}

#[derive(Debug, Error)]
enum Cause {
    #[error(transparent)]
    Transport(reqwest::Error),
    #[error("network response was not ok: {0}")]
    Status(StatusCode),
    #[error("response body is not JSON: {0}")]
    Decode(serde_json::Error),
}

impl FetchError {
    pub(crate) fn status(status: StatusCode) -> Self {
        Self {
            cause: Cause::Status(status),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self {
            cause: Cause::Transport(err),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            cause: Cause::Decode(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Order ID must be exactly 64 characters.")]
pub struct InvalidOrderId {
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid api url `{url}`: {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown panel `{0}`, expected one of: overview, source, destination, additional")]
pub struct UnknownPanel(pub String);
