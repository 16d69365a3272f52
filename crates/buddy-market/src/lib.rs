//! # buddy-market
//!
//! Market data and rule-based analysis behind CryptoBuddy.
//!
//! ## How a coin is judged
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  MarketDataClient ──► CoinRecord {price, market cap, volume}  │
//! │                              │                                │
//! │          liquidity = volume / market cap  (0 if cap is 0)     │
//! │            > 0.10  High │ > 0.05  Medium │ else  Low          │
//! │                              │                                │
//! │  SustainabilityTable ──► "8.0/10 (low energy use)"            │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sustainability figures are hand-authored; the market data provider
//! has no environmental data.

pub mod analyzer;
pub mod error;
pub mod market;
pub mod model;
pub mod sustainability;

pub use analyzer::{CoinAnalyzer, liquidity_ratio};
pub use error::{MarketError, Result};
pub use market::{CoinGeckoClient, CoinGeckoConfig, MarketDataClient, StaticMarketData};
pub use model::{
    AnalysisResult, CoinRecord, EnergyUse, Profitability, ProfitabilityRanking,
    SustainabilityEntry,
};
pub use sustainability::SustainabilityTable;
