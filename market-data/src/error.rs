use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the market data provider.
///
/// Distinguishing these from an empty dataset is the whole point: callers
/// that only want the lenient behavior use the `_or_*` wrappers in
/// `signal-generation` instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to market data provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("market data provider returned status {0}")]
    Status(StatusCode),

    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),
}
