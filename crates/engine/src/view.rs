//! Filter and sort helpers over display rows

use cryptoprice_core::{DisplayRow, Metric, SortOrder};
use std::collections::BTreeSet;

/// Sorted unique coin display names, for the multiselect and favorites views
pub fn coin_names(rows: &[DisplayRow]) -> Vec<String> {
    let names: BTreeSet<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    names.into_iter().map(String::from).collect()
}

/// Keep only rows whose display name is in `names`
///
/// One operation serves both the favorites-only view and the free
/// multiselect; the caller decides which set to pass
/// (see [`FavoritesSet::names`](cryptoprice_core::FavoritesSet::names)).
pub fn filter_by_names(rows: &[DisplayRow], names: &BTreeSet<String>) -> Vec<DisplayRow> {
    rows.iter()
        .filter(|r| names.contains(&r.name))
        .cloned()
        .collect()
}

/// Re-sort rows in place by a metric column
///
/// Sorts on the carried raw value, never on the formatted string. Stable:
/// equal values keep their arrival order. `Unsorted` leaves the slice
/// untouched.
pub fn sort_by_metric(rows: &mut [DisplayRow], metric: Metric, order: SortOrder) {
    let key = |row: &DisplayRow| match metric {
        Metric::Change24h => row.change_24h_value,
        Metric::CurrentPrice => row.current_price_value,
        Metric::CirculatingSupply => row.circulating_supply_value,
    };

    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => rows.sort_by(|a, b| key(a).total_cmp(&key(b))),
        SortOrder::Descending => rows.sort_by(|a, b| key(b).total_cmp(&key(a))),
    }
}
