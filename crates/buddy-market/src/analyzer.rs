//! Coin Analyzer
//!
//! Rule-based view of a coin: a liquidity ratio (volume / market cap) as a
//! crude profitability proxy, plus the static sustainability facts.

use std::cmp::Ordering;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::Result;
use crate::market::MarketDataClient;
use crate::model::{AnalysisResult, CoinRecord, Profitability, ProfitabilityRanking};
use crate::sustainability::SustainabilityTable;

/// Volume divided by market cap; zero when the market cap is zero
pub fn liquidity_ratio(volume: Decimal, market_cap: Decimal) -> Decimal {
    if market_cap.is_zero() {
        return Decimal::ZERO;
    }
    volume.checked_div(market_cap).unwrap_or(Decimal::ZERO)
}

/// Combines live market data with the sustainability table
pub struct CoinAnalyzer {
    market: Arc<dyn MarketDataClient>,
    table: Arc<SustainabilityTable>,
}

impl CoinAnalyzer {
    pub fn new(market: Arc<dyn MarketDataClient>, table: Arc<SustainabilityTable>) -> Self {
        Self { market, table }
    }

    /// Analyze a single coin. Absent when the market data client has nothing.
    pub async fn analyze(&self, coin_id: &str) -> Result<Option<AnalysisResult>> {
        let Some(record) = self.market.fetch(coin_id).await? else {
            tracing::debug!(coin_id, client = self.market.name(), "no market data");
            return Ok(None);
        };
        Ok(Some(self.assess(record)))
    }

    fn assess(&self, record: CoinRecord) -> AnalysisResult {
        let ratio = liquidity_ratio(record.volume, record.market_cap);
        let sustainability = self.table.lookup(&record.coin_id).describe();

        AnalysisResult {
            coin_id: record.coin_id,
            name: record.name,
            price: record.last_price,
            market_cap: record.market_cap,
            volume: record.volume,
            liquidity_ratio: ratio,
            profitability: Profitability::from_ratio(ratio),
            sustainability,
        }
    }

    /// Analysis of the coin with the best sustainability score
    pub async fn greenest_pick(&self) -> Result<Option<AnalysisResult>> {
        match self.table.greenest() {
            Some(coin_id) => self.analyze(coin_id).await,
            None => Ok(None),
        }
    }

    /// Analyze every coin in the table, one after another, and return the one
    /// with the highest profitability label under `ranking`. Coins that cannot
    /// be fetched are skipped; the earliest coin wins a tie.
    pub async fn most_profitable(
        &self,
        ranking: ProfitabilityRanking,
    ) -> Result<Option<AnalysisResult>> {
        let mut best: Option<AnalysisResult> = None;

        for coin_id in self.table.coin_ids() {
            let candidate = match self.analyze(coin_id).await {
                Ok(Some(result)) => result,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(coin_id, error = %e, "skipping coin in profitability ranking");
                    continue;
                }
            };

            best = match best {
                Some(current)
                    if ranking.compare(candidate.profitability, current.profitability)
                        != Ordering::Greater =>
                {
                    Some(current)
                }
                _ => Some(candidate),
            };
        }

        Ok(best)
    }
}
