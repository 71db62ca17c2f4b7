use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Immutable snapshot of material unit prices.
///
/// A snapshot is read-only for the duration of a computation; reloading the
/// underlying file produces a new snapshot instead of mutating one in use,
/// so concurrent passes over independent logs can each hold their own.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: BTreeMap<String, f64>,
}

impl PriceTable {
    /// Build a snapshot from name/price pairs
    pub fn new<N: Into<String>>(prices: impl IntoIterator<Item = (N, f64)>) -> Self {
        Self {
            prices: prices
                .into_iter()
                .map(|(name, price)| (name.into(), price))
                .collect(),
        }
    }

    /// Unit price for `material`, if the table has one
    #[must_use]
    pub fn price(&self, material: &str) -> Option<f64> {
        self.prices.get(material).copied()
    }

    /// Whether the table prices `material`
    #[must_use]
    pub fn contains(&self, material: &str) -> bool {
        self.prices.contains_key(material)
    }

    /// Number of priced materials
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Parse a snapshot from TOML text: one `Material = price` entry per
    /// material, integer or decimal prices.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a snapshot from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
