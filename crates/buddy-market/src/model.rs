//! Domain Models
//!
//! Core data types for coin lookups and analysis.
//! Uses `rust_decimal` for all monetary values - never use f64 for money!

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MarketError;

/// Live market figures for one coin
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Market data identifier (e.g., "bitcoin")
    pub coin_id: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Last traded price in USD
    pub last_price: Decimal,

    /// Market capitalization in USD
    pub market_cap: Decimal,

    /// 24h trading volume in USD
    pub volume: Decimal,

    /// When the figures were fetched
    pub fetched_at: DateTime<Utc>,
}

impl CoinRecord {
    pub fn new(
        coin_id: impl Into<String>,
        name: impl Into<String>,
        last_price: Decimal,
        market_cap: Decimal,
        volume: Decimal,
    ) -> Self {
        Self {
            coin_id: coin_id.into(),
            name: name.into(),
            last_price,
            market_cap,
            volume,
            fetched_at: Utc::now(),
        }
    }
}

/// Display name derived from an identifier: "bitcoin" -> "Bitcoin"
pub fn display_name(coin_id: &str) -> String {
    let mut chars = coin_id.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Hand-assigned energy consumption class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUse {
    Low,
    Medium,
    High,
    Unknown,
}

impl EnergyUse {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EnergyUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static sustainability facts for a coin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilityEntry {
    pub energy_use: EnergyUse,

    /// 0 (worst) to 1 (best)
    pub score: Decimal,
}

impl SustainabilityEntry {
    pub const fn new(energy_use: EnergyUse, score: Decimal) -> Self {
        Self { energy_use, score }
    }

    /// Entry used for coins missing from the table
    pub const fn unknown() -> Self {
        Self::new(EnergyUse::Unknown, dec!(0.5))
    }

    /// Human readable form, e.g. "8.0/10 (low energy use)"
    pub fn describe(&self) -> String {
        let out_of_ten = (self.score * dec!(10))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("{out_of_ten:.1}/10 ({} energy use)", self.energy_use)
    }
}

/// Profitability bucket derived from the liquidity ratio
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Profitability {
    Low,
    Medium,
    High,
}

impl Profitability {
    /// Ratio above which a coin counts as highly liquid
    pub const HIGH_THRESHOLD: Decimal = dec!(0.10);

    /// Ratio above which a coin counts as moderately liquid
    pub const MEDIUM_THRESHOLD: Decimal = dec!(0.05);

    /// Bucket a liquidity ratio. Both thresholds are exclusive.
    pub fn from_ratio(ratio: Decimal) -> Self {
        if ratio > Self::HIGH_THRESHOLD {
            Self::High
        } else if ratio > Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Profitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How "most profitable" compares profitability labels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitabilityRanking {
    /// Low < Medium < High
    #[default]
    Ordinal,

    /// Compare the label text, so "Medium" > "Low" > "High".
    /// Matches the selection made by earlier CryptoBuddy releases.
    Lexical,
}

impl ProfitabilityRanking {
    pub fn compare(self, a: Profitability, b: Profitability) -> Ordering {
        match self {
            Self::Ordinal => a.cmp(&b),
            Self::Lexical => a.as_str().cmp(b.as_str()),
        }
    }
}

impl std::str::FromStr for ProfitabilityRanking {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ordinal" => Ok(Self::Ordinal),
            "lexical" => Ok(Self::Lexical),
            other => Err(MarketError::Config(format!(
                "unknown profitability ranking '{other}' (expected 'ordinal' or 'lexical')"
            ))),
        }
    }
}

/// Derived view of a coin combining live data and the static table
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub coin_id: String,
    pub name: String,
    pub price: Decimal,
    pub market_cap: Decimal,
    pub volume: Decimal,

    /// volume / market cap
    pub liquidity_ratio: Decimal,

    pub profitability: Profitability,

    /// Formatted sustainability line, see [`SustainabilityEntry::describe`]
    pub sustainability: String,
}

/// Format a USD amount with two decimals: 97500 -> "97500.00"
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

/// Format a USD amount rounded to whole dollars with thousands separators:
/// 1234567.6 -> "1,234,568"
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profitability_thresholds() {
        assert_eq!(Profitability::from_ratio(dec!(0.15)), Profitability::High);
        assert_eq!(Profitability::from_ratio(dec!(0.08)), Profitability::Medium);
        assert_eq!(Profitability::from_ratio(dec!(0.02)), Profitability::Low);
        assert_eq!(Profitability::from_ratio(dec!(0.10)), Profitability::Medium);
        assert_eq!(Profitability::from_ratio(dec!(0.05)), Profitability::Low);
        assert_eq!(Profitability::from_ratio(Decimal::ZERO), Profitability::Low);
    }

    #[test]
    fn test_rankings() {
        use Profitability::{High, Low, Medium};

        let ordinal = ProfitabilityRanking::Ordinal;
        assert_eq!(ordinal.compare(High, Medium), Ordering::Greater);
        assert_eq!(ordinal.compare(Low, Medium), Ordering::Less);

        let lexical = ProfitabilityRanking::Lexical;
        assert_eq!(lexical.compare(Medium, Low), Ordering::Greater);
        assert_eq!(lexical.compare(Low, High), Ordering::Greater);
    }

    #[test]
    fn test_ranking_from_str() {
        let parse = |s: &str| s.parse::<ProfitabilityRanking>();
        assert_eq!(parse("Lexical").unwrap(), ProfitabilityRanking::Lexical);
        assert_eq!(parse(" ordinal ").unwrap(), ProfitabilityRanking::Ordinal);
        assert!(parse("by-vibes").is_err());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            SustainabilityEntry::new(EnergyUse::High, dec!(0.3)).describe(),
            "3.0/10 (high energy use)"
        );
        assert_eq!(SustainabilityEntry::unknown().describe(), "5.0/10 (unknown energy use)");
        assert_eq!(
            SustainabilityEntry::new(EnergyUse::Low, dec!(0.85)).describe(),
            "8.5/10 (low energy use)"
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("bitcoin"), "Bitcoin");
        assert_eq!(display_name("ETHEREUM"), "Ethereum");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_format_amounts() {
        assert_eq!(format_price(dec!(97500)), "97500.00");
        assert_eq!(format_price(dec!(0.955)), "0.96");
        assert_eq!(format_grouped(dec!(1930000000000)), "1,930,000,000,000");
        assert_eq!(format_grouped(dec!(999.5)), "1,000");
        assert_eq!(format_grouped(dec!(12)), "12");
        assert_eq!(format_grouped(Decimal::ZERO), "0");
        assert_eq!(format_grouped(dec!(-1234)), "-1,234");
    }
}
