//! pt-BR display formatting of market snapshots

use cryptoprice_core::{DisplayRow, Snapshot};

/// Timestamp layout used across table and export views
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed-point rendering with pt-BR separators: `.` for thousands,
/// `,` for the decimal (`1234.5` -> `"1.234,50"`)
pub fn format_decimal_br(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(rendered.len() + digits / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

/// Two fraction digits and a `%` suffix; the decimal point stays plain
/// (`-2.567` -> `"-2.57%"`)
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Project a snapshot into display rows
///
/// Pure and idempotent: the same snapshot always yields the same rows.
/// Monetary fields get two fraction digits, circulating supply none; raw
/// numeric values of the chart metrics ride along for numeric re-sorting.
pub fn format_rows(snapshot: &Snapshot) -> Vec<DisplayRow> {
    snapshot
        .coins
        .iter()
        .map(|coin| DisplayRow {
            technical_id: coin.id.clone(),
            symbol: coin.symbol.clone(),
            name: coin.name.clone(),
            current_price: format_decimal_br(coin.current_price, 2),
            change_24h: format_percent(coin.price_change_percentage_24h),
            market_cap: format_decimal_br(coin.market_cap, 2),
            market_cap_rank: coin.market_cap_rank,
            total_volume: format_decimal_br(coin.total_volume, 2),
            circulating_supply: format_decimal_br(coin.circulating_supply, 0),
            ath: format_decimal_br(coin.ath, 2),
            atl: format_decimal_br(coin.atl, 2),
            last_updated: coin.last_updated.format(TIMESTAMP_FORMAT).to_string(),
            current_price_value: coin.current_price,
            change_24h_value: coin.price_change_percentage_24h,
            circulating_supply_value: coin.circulating_supply,
        })
        .collect()
}
