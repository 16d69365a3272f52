//! Market Data Clients
//!
//! Abstraction over where live coin figures come from, with a CoinGecko
//! implementation and an in-memory one for offline use and tests.

mod coingecko;
mod offline;

pub use coingecko::{CoinGeckoClient, CoinGeckoConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use offline::StaticMarketData;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::CoinRecord;

/// Market data client trait (Strategy pattern)
///
/// One call is one lookup: implementations must not cache, so repeated
/// questions about the same coin always see fresh figures.
#[async_trait]
pub trait MarketDataClient: Send + Sync {
    /// Fetch current figures for `coin_id`.
    ///
    /// `Ok(None)` means the provider answered but had nothing usable
    /// (non-success status, unknown coin). `Err` means the request itself
    /// failed or the body could not be decoded.
    async fn fetch(&self, coin_id: &str) -> Result<Option<CoinRecord>>;

    /// Client name
    fn name(&self) -> &str;
}
