//! CoinGecko Client
//!
//! Unauthenticated `GET /api/v3/coins/{id}` against the public API. One
//! request per lookup: no retries, no caching, no rate-limit handling.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::MarketDataClient;
use crate::error::{MarketError, Result};
use crate::model::{CoinRecord, display_name};

/// Public CoinGecko host
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com";

/// Per-request timeout so a slow upstream cannot hang the chat
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CoinGecko client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinGeckoConfig {
    /// Scheme and host, without the `/api/v3` suffix
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Market data client backed by the CoinGecko REST API
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
}

impl CoinGeckoClient {
    /// Create a client; fails if the timeout is zero or the HTTP client
    /// cannot be built.
    pub fn new(config: CoinGeckoConfig) -> Result<Self> {
        if config.timeout_secs == 0 {
            return Err(MarketError::Config("timeout must be at least one second".into()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cryptobuddy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn coin_url(&self, coin_id: &str) -> String {
        format!("{}/api/v3/coins/{}", self.base_url, coin_id)
    }
}

#[async_trait]
impl MarketDataClient for CoinGeckoClient {
    async fn fetch(&self, coin_id: &str) -> Result<Option<CoinRecord>> {
        let url = self.coin_url(coin_id);
        tracing::debug!(%url, "fetching coin data");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(coin_id, %status, "market data request was not successful");
            return Ok(None);
        }

        let body = response.bytes().await?;
        let coin: CoinResponse = serde_json::from_slice(&body)?;
        Ok(Some(coin.into_record(coin_id)))
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

// Response schema. Every field is optional and defaulted on its own, so a
// missing volume does not hide a present price.

#[derive(Debug, Default, Deserialize)]
struct CoinResponse {
    name: Option<String>,
    market_data: Option<MarketData>,
}

#[derive(Debug, Default, Deserialize)]
struct MarketData {
    current_price: Option<UsdQuote>,
    market_cap: Option<UsdQuote>,
    total_volume: Option<UsdQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct UsdQuote {
    usd: Option<Decimal>,
}

fn usd(quote: Option<UsdQuote>) -> Decimal {
    quote.and_then(|q| q.usd).unwrap_or(Decimal::ZERO)
}

impl CoinResponse {
    fn into_record(self, coin_id: &str) -> CoinRecord {
        let market = self.market_data.unwrap_or_default();
        let name = self.name.unwrap_or_else(|| display_name(coin_id));

        CoinRecord::new(
            coin_id,
            name,
            usd(market.current_price),
            usd(market.market_cap),
            usd(market.total_volume),
        )
    }
}
