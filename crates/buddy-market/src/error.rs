//! Error Types for Market Data and Analysis

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketError>;

/// Failures while fetching or decoding market data.
///
/// A non-success HTTP status is not an error here: clients report it as an
/// absent record so callers can treat "unknown coin" and "provider down" the
/// same way.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed market data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
