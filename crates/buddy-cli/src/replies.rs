//! Canned replies and response formatting

use buddy_core::BuddyError;
use buddy_market::AnalysisResult;
use buddy_market::model::{format_grouped, format_price};

pub const GREETING: &str = "\
🤖 Hi, I'm CryptoBuddy! 🌍💰
I fetch live market data from CoinGecko + sustainability insights.
Ask me about Bitcoin, Ethereum, Cardano, trends, sustainability, or profitability.
Type 'quit' anytime to exit.

";

pub const PROMPT: &str = "You: ";

pub const DISCLAIMER: &str = "⚠️ Crypto is risky — always do your own research (DYOR)!";

pub const FAREWELL: &str =
    "CryptoBuddy: Goodbye! ⚠️ Remember, crypto is risky — always do your own research (DYOR)!";

pub const COULD_NOT_FETCH: &str = "CryptoBuddy: ❌ Could not fetch data, try again later.";

pub const TREND_PLACEHOLDER: &str = "CryptoBuddy: 📈 I currently check profitability trends via \
volume/market cap. Try asking about a specific coin like Bitcoin or Ethereum!";

pub const HELP: &str = "CryptoBuddy: 🤷 I didn't quite get that. Try asking about Bitcoin, \
Ethereum, Cardano, or use words like 'green', 'profit', or 'trending'.";

/// Line shown on stderr when the chat cannot continue
pub fn fatal_error(err: &BuddyError) -> String {
    format!("CryptoBuddy: ❌ {}", err.user_message())
}

/// Multi-line summary card for one coin
pub fn coin_card(result: &AnalysisResult) -> String {
    format!(
        "\nCryptoBuddy: 🔍 {}\n  Price: ${}\n  Market Cap: ${}\n  Volume: ${}\n  \
         Profitability: {}\n  Sustainability: {}",
        result.name,
        format_price(result.price),
        format_grouped(result.market_cap),
        format_grouped(result.volume),
        result.profitability,
        result.sustainability,
    )
}

pub fn greenest_pick(result: &AnalysisResult) -> String {
    format!(
        "CryptoBuddy: 🌱 The greenest coin is {} with sustainability {}.",
        result.name, result.sustainability
    )
}

pub fn most_profitable(result: &AnalysisResult) -> String {
    format!(
        "CryptoBuddy: 💰 The most profitable pick looks like {} (Profitability: {}).",
        result.name, result.profitability
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use buddy_market::Profitability;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn bitcoin() -> AnalysisResult {
        AnalysisResult {
            coin_id: "bitcoin".into(),
            name: "Bitcoin".into(),
            price: dec!(97500),
            market_cap: dec!(1930000000000),
            volume: dec!(25000000000.4),
            liquidity_ratio: dec!(0.013),
            profitability: Profitability::Low,
            sustainability: "3.0/10 (high energy use)".into(),
        }
    }

    #[test]
    fn test_coin_card() {
        assert_eq!(
            coin_card(&bitcoin()),
            [
                "",
                "CryptoBuddy: 🔍 Bitcoin",
                "  Price: $97500.00",
                "  Market Cap: $1,930,000,000,000",
                "  Volume: $25,000,000,000",
                "  Profitability: Low",
                "  Sustainability: 3.0/10 (high energy use)",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_pick_messages() {
        assert_eq!(
            greenest_pick(&bitcoin()),
            "CryptoBuddy: 🌱 The greenest coin is Bitcoin with sustainability \
             3.0/10 (high energy use)."
        );
        assert_eq!(
            most_profitable(&bitcoin()),
            "CryptoBuddy: 💰 The most profitable pick looks like Bitcoin (Profitability: Low)."
        );
    }

    #[test]
    fn test_fatal_error_uses_friendly_text() {
        let err = BuddyError::from(std::io::Error::other("EPIPE on fd 1"));
        assert_eq!(
            fatal_error(&err),
            "CryptoBuddy: ❌ I lost the connection to your terminal."
        );
    }
}
