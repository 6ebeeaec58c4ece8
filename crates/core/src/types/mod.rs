//! Shared vocabulary types passed in by the presentation shell

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metric columns available for chart views and numeric re-sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Change24h,
    CurrentPrice,
    CirculatingSupply,
}

impl Metric {
    /// Portuguese column label, identical to the display table header
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Change24h => "Variação 24h (%)",
            Metric::CurrentPrice => "Preço Atual (US$)",
            Metric::CirculatingSupply => "Quantidade Circulante",
        }
    }

    /// Caption shown under the metric selector
    pub fn description(&self) -> &'static str {
        match self {
            Metric::Change24h => {
                "Percentual de valorização ou desvalorização nas últimas 24 horas."
            }
            Metric::CurrentPrice => "Valor atual da criptomoeda em dólares americanos.",
            Metric::CirculatingSupply => "Número total de unidades disponíveis no mercado.",
        }
    }
}

/// Sort direction for table and chart views
///
/// `Unsorted` preserves whatever order the input arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Unsorted,
    Ascending,
    Descending,
}

/// Session-scoped set of favorite coin display names
///
/// Owned by the presentation shell and handed into filter operations as a
/// plain value. Purely a filter predicate: never an input to analysis, never
/// persisted beyond the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesSet {
    names: BTreeSet<String>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Favorite the name if absent, unfavorite it if present.
    /// Returns true when the name is a favorite afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.names.remove(name) {
            false
        } else {
            self.names.insert(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Comma-joined names for the "Favoritas: ..." caption
    pub fn joined(&self) -> String {
        self.names.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
