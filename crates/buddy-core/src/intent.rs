//! Intent Classification
//!
//! Keyword-based intent matching. The query is split into lowercase word
//! tokens and tested against an ordered list of rules; the first rule with a
//! matching token decides the intent. There is no scoring, stemming or
//! negation handling, so "not profitable" is still a profitability question.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Words that point at eco-friendliness questions
pub const SUSTAINABILITY_KEYWORDS: &[&str] =
    &["sustainable", "eco", "green", "environment", "planet", "friendly"];

/// Words that point at profitability questions
pub const PROFIT_KEYWORDS: &[&str] =
    &["profit", "profitable", "gain", "investment", "money", "rich"];

/// Words that point at market trend questions
pub const TREND_KEYWORDS: &[&str] = &["trend", "trending", "up", "rise", "growing", "increase"];

/// Inputs that end the conversation (compared case-insensitively)
pub const EXIT_COMMANDS: &[&str] = &["quit", "exit", "bye"];

/// Coarse category of a user query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Sustainability,
    Profitability,
    Trend,
    Bitcoin,
    Ethereum,
    Cardano,
    Unknown,
}

impl Intent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability",
            Self::Profitability => "profitability",
            Self::Trend => "trend",
            Self::Bitcoin => "bitcoin",
            Self::Ethereum => "ethereum",
            Self::Cardano => "cardano",
            Self::Unknown => "unknown",
        }
    }

    /// Market data identifier for intents that name a single coin
    pub const fn coin_id(self) -> Option<&'static str> {
        match self {
            Self::Bitcoin | Self::Ethereum | Self::Cardano => Some(self.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split text into lowercase word tokens (UAX #29 word boundaries)
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_lowercase).collect()
}

/// Whether the raw input line asks to end the conversation
pub fn is_exit_command(text: &str) -> bool {
    let text = text.trim();
    EXIT_COMMANDS.iter().any(|cmd| text.eq_ignore_ascii_case(cmd))
}

/// One classification rule: any keyword present selects the intent
#[derive(Clone, Debug)]
struct IntentRule {
    intent: Intent,
    keywords: HashSet<&'static str>,
}

impl IntentRule {
    fn new(intent: Intent, keywords: &[&'static str]) -> Self {
        Self {
            intent,
            keywords: keywords.iter().copied().collect(),
        }
    }

    fn matches(&self, tokens: &[String]) -> bool {
        tokens.iter().any(|t| self.keywords.contains(t.as_str()))
    }
}

/// Ordered keyword classifier
#[derive(Clone, Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Classifier with the standard rule order: topic keywords first, then
    /// literal coin names.
    pub fn new() -> Self {
        Self {
            rules: vec![
                IntentRule::new(Intent::Sustainability, SUSTAINABILITY_KEYWORDS),
                IntentRule::new(Intent::Profitability, PROFIT_KEYWORDS),
                IntentRule::new(Intent::Trend, TREND_KEYWORDS),
                IntentRule::new(Intent::Bitcoin, &["bitcoin"]),
                IntentRule::new(Intent::Ethereum, &["ethereum"]),
                IntentRule::new(Intent::Cardano, &["cardano"]),
            ],
        }
    }

    /// Classify a free-text query
    pub fn classify(&self, text: &str) -> Intent {
        let tokens = tokenize(text);
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.matches(&tokens))
            .map_or(Intent::Unknown, |rule| rule.intent);

        tracing::debug!(?tokens, %intent, "classified query");
        intent
    }
}
