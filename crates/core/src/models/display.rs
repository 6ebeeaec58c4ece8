//! Display-formatted table projection

use serde::{Deserialize, Serialize};

/// Fixed Portuguese column labels, in table order
///
/// Downstream consumers (table views, CSV/XLSX headers) rely on these exact
/// strings; do not reword them.
pub const DISPLAY_HEADERS: [&str; 12] = [
    "Nome Técnico",
    "Símbolo",
    "Nome da Moeda",
    "Preço Atual (US$)",
    "Variação 24h (%)",
    "Valor de Mercado (US$)",
    "Ranking de Mercado",
    "Volume Total (US$)",
    "Quantidade Circulante",
    "Preço Máximo Histórico",
    "Preço Mínimo Histórico",
    "Última Atualização",
];

/// Per-coin formatted projection of a [`CoinRecord`](super::CoinRecord)
///
/// Monetary fields use pt-BR separators (`1.234,50`), the 24h change keeps a
/// plain decimal point with a `%` suffix (`-2.57%`). The raw numeric values
/// of the chart metrics ride alongside the strings so views sort on numbers
/// instead of reparsing formatted text. Read-only: rows are derived for
/// rendering and export, never fed back into computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub technical_id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: String,
    pub change_24h: String,
    pub market_cap: String,
    pub market_cap_rank: u32,
    pub total_volume: String,
    pub circulating_supply: String,
    pub ath: String,
    pub atl: String,
    pub last_updated: String,
    /// Raw USD price, kept for numeric re-sorting and charts
    pub current_price_value: f64,
    /// Raw 24h change in percent
    pub change_24h_value: f64,
    /// Raw circulating supply
    pub circulating_supply_value: f64,
}

impl DisplayRow {
    /// Cell values in [`DISPLAY_HEADERS`] order, for table and export writers
    pub fn cells(&self) -> [String; 12] {
        [
            self.technical_id.clone(),
            self.symbol.clone(),
            self.name.clone(),
            self.current_price.clone(),
            self.change_24h.clone(),
            self.market_cap.clone(),
            self.market_cap_rank.to_string(),
            self.total_volume.clone(),
            self.circulating_supply.clone(),
            self.ath.clone(),
            self.atl.clone(),
            self.last_updated.clone(),
        ]
    }
}
