//! Static Market Data
//!
//! In-memory client for offline demos and tests. Returns whatever records
//! it holds and counts lookups, so callers can check nothing is cached.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use tokio::sync::RwLock;

use super::MarketDataClient;
use crate::error::Result;
use crate::model::CoinRecord;

/// Market data client with fixed records
pub struct StaticMarketData {
    records: RwLock<HashMap<String, CoinRecord>>,
    fetches: AtomicUsize,
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticMarketData {
    /// Empty client: every lookup is absent
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Realistic figures for the built-in coins
    pub fn sample() -> Self {
        Self::new()
            .with_record(CoinRecord::new(
                "bitcoin",
                "Bitcoin",
                dec!(97500),
                dec!(1_930_000_000_000),
                dec!(25_000_000_000),
            ))
            .with_record(CoinRecord::new(
                "ethereum",
                "Ethereum",
                dec!(3450),
                dec!(415_000_000_000),
                dec!(15_000_000_000),
            ))
            .with_record(CoinRecord::new(
                "cardano",
                "Cardano",
                dec!(0.95),
                dec!(33_500_000_000),
                dec!(2_100_000_000),
            ))
    }

    /// Add or replace a record (builder style)
    #[must_use]
    pub fn with_record(mut self, record: CoinRecord) -> Self {
        self.records.get_mut().insert(record.coin_id.clone(), record);
        self
    }

    /// Add or replace a record
    pub async fn insert(&self, record: CoinRecord) {
        self.records.write().await.insert(record.coin_id.clone(), record);
    }

    /// Number of lookups served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MarketDataClient for StaticMarketData {
    async fn fetch(&self, coin_id: &str) -> Result<Option<CoinRecord>> {
        self.fetches.fetch_add(1, Ordering::Relaxed);

        let records = self.records.read().await;
        Ok(records.get(coin_id).cloned().map(|mut record| {
            record.fetched_at = Utc::now();
            record
        }))
    }

    fn name(&self) -> &str {
        "StaticMarketData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_data() {
        let market = StaticMarketData::sample();

        let btc = market.fetch("bitcoin").await.unwrap().unwrap();
        assert_eq!(btc.name, "Bitcoin");
        assert_eq!(btc.last_price, dec!(97500));
        assert_eq!(market.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_coin_is_absent() {
        let market = StaticMarketData::sample();
        assert!(market.fetch("notreal").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_record() {
        let market = StaticMarketData::sample();
        market
            .insert(CoinRecord::new("bitcoin", "Bitcoin", dec!(1), dec!(90), dec!(9)))
            .await;

        let btc = market.fetch("bitcoin").await.unwrap().unwrap();
        assert_eq!(btc.last_price, dec!(1));
        assert_eq!(market.fetch_count(), 1);
    }
}
