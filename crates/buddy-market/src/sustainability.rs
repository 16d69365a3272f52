//! Sustainability Table
//!
//! Hand-authored energy-use facts. The market data provider has no
//! environmental data, so these figures are compiled in and never change
//! at runtime. Build the table once and share it behind an `Arc`.

use rust_decimal_macros::dec;

use crate::model::{EnergyUse, SustainabilityEntry};

/// Immutable, ordered map from coin id to sustainability facts
#[derive(Clone, Debug)]
pub struct SustainabilityTable {
    entries: Vec<(String, SustainabilityEntry)>,
}

impl Default for SustainabilityTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SustainabilityTable {
    /// The coins CryptoBuddy knows about
    pub fn builtin() -> Self {
        Self::from_entries([
            ("bitcoin", SustainabilityEntry::new(EnergyUse::High, dec!(0.3))),
            ("ethereum", SustainabilityEntry::new(EnergyUse::Medium, dec!(0.6))),
            ("cardano", SustainabilityEntry::new(EnergyUse::Low, dec!(0.8))),
        ])
    }

    /// Build a table from (id, entry) pairs; order is preserved and a repeated
    /// id keeps its first entry.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, SustainabilityEntry)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, SustainabilityEntry)> = Vec::new();
        for (id, entry) in entries {
            let id = id.into();
            if !table.iter().any(|(existing, _)| *existing == id) {
                table.push((id, entry));
            }
        }
        Self { entries: table }
    }

    pub fn get(&self, coin_id: &str) -> Option<&SustainabilityEntry> {
        self.entries
            .iter()
            .find(|(id, _)| id == coin_id)
            .map(|(_, entry)| entry)
    }

    /// Entry for `coin_id`, or the unknown/0.5 default
    pub fn lookup(&self, coin_id: &str) -> SustainabilityEntry {
        self.get(coin_id)
            .copied()
            .unwrap_or_else(SustainabilityEntry::unknown)
    }

    /// Identifiers in table order
    pub fn coin_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Identifier with the highest score; earliest entry wins ties
    pub fn greenest(&self) -> Option<&str> {
        self.entries
            .iter()
            .fold(None::<&(String, SustainabilityEntry)>, |best, candidate| match best {
                Some(b) if b.1.score >= candidate.1.score => Some(b),
                _ => Some(candidate),
            })
            .map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
