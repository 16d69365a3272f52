//! Configuration
//!
//! Read from the environment (and `.env`, loaded in `main`). Values that are
//! set but unparseable are startup errors rather than silent defaults.

use std::str::FromStr;
use std::sync::Arc;

use buddy_core::{BuddyError, Result};
use buddy_market::{
    CoinGeckoClient, CoinGeckoConfig, MarketDataClient, ProfitabilityRanking, StaticMarketData,
};

pub const ENV_API_BASE: &str = "CRYPTOBUDDY_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "CRYPTOBUDDY_TIMEOUT_SECS";
pub const ENV_MARKET: &str = "CRYPTOBUDDY_MARKET";
pub const ENV_PROFIT_RANKING: &str = "CRYPTOBUDDY_PROFIT_RANKING";

/// Where coin figures come from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarketSource {
    /// Live CoinGecko API
    #[default]
    CoinGecko,
    /// Built-in sample figures, no network
    Offline,
}

impl FromStr for MarketSource {
    type Err = BuddyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coingecko" => Ok(Self::CoinGecko),
            "offline" => Ok(Self::Offline),
            other => Err(BuddyError::Config(format!(
                "{ENV_MARKET}: unknown market source '{other}' (expected 'coingecko' or 'offline')"
            ))),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuddyConfig {
    pub market: MarketSource,
    pub coingecko: CoinGeckoConfig,
    pub ranking: ProfitabilityRanking,
}

impl BuddyConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup(ENV_API_BASE) {
            let base = base.trim();
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(BuddyError::Config(format!(
                    "{ENV_API_BASE}: expected an http(s) URL, got '{base}'"
                )));
            }
            config.coingecko.base_url = base.to_string();
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
            config.coingecko.timeout_secs = match timeout.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(BuddyError::Config(format!(
                        "{ENV_TIMEOUT_SECS}: expected a positive number of seconds, got '{timeout}'"
                    )));
                }
            };
        }

        if let Some(market) = lookup(ENV_MARKET) {
            config.market = market.parse()?;
        }

        if let Some(ranking) = lookup(ENV_PROFIT_RANKING) {
            config.ranking = ranking
                .parse()
                .map_err(|e| BuddyError::Config(format!("{ENV_PROFIT_RANKING}: {e}")))?;
        }

        Ok(config)
    }

    /// Build the configured market data client
    pub fn market_client(&self) -> buddy_market::Result<Arc<dyn MarketDataClient>> {
        Ok(match self.market {
            MarketSource::CoinGecko => Arc::new(CoinGeckoClient::new(self.coingecko.clone())?),
            MarketSource::Offline => Arc::new(StaticMarketData::sample()),
        })
    }
}
