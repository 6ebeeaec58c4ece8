//! Snapshot analysis: best/worst performers, averages, rankings

use chrono::Utc;
use cryptoprice_core::{
    AnalysisSummary, CoinRecord, Error, MarketMood, Result, Snapshot, TopMover,
};
use tracing::debug;

/// Number of entries in the top-movers ranking
const TOP_MOVERS: usize = 3;

/// Compute the derived summary for one snapshot
///
/// A single stable descending sort by 24h change defines the whole ranking:
/// `best` is its first element, `top_movers` its prefix, and `worst` the
/// earliest snapshot-order element of the minimal group. `best_coin` equals
/// `top_movers[0].name` by construction.
///
/// Fails with [`Error::EmptySnapshot`] on zero records; a snapshot with
/// fewer than three records yields that many top movers.
pub fn analyze(snapshot: &Snapshot) -> Result<AnalysisSummary> {
    if snapshot.is_empty() {
        return Err(Error::EmptySnapshot);
    }

    // Stable sort: equal changes keep snapshot order, so the first element
    // of any equal-change group is its earliest occurrence
    let mut ranked: Vec<&CoinRecord> = snapshot.coins.iter().collect();
    ranked.sort_by(|a, b| {
        b.price_change_percentage_24h
            .total_cmp(&a.price_change_percentage_24h)
    });

    let best = ranked[0];

    // Walk back to the start of the minimal group so ties at the bottom
    // also resolve to the earliest snapshot-order record
    let mut worst_idx = ranked.len() - 1;
    let min_change = ranked[worst_idx].price_change_percentage_24h;
    while worst_idx > 0 && ranked[worst_idx - 1].price_change_percentage_24h == min_change {
        worst_idx -= 1;
    }
    let worst = ranked[worst_idx];

    let total: f64 = snapshot
        .coins
        .iter()
        .map(|c| c.price_change_percentage_24h)
        .sum();
    let average_change = total / snapshot.len() as f64;

    let coins_up = snapshot
        .coins
        .iter()
        .filter(|c| c.price_change_percentage_24h > 0.0)
        .count();
    let coins_down = snapshot
        .coins
        .iter()
        .filter(|c| c.price_change_percentage_24h < 0.0)
        .count();

    let top_movers = ranked
        .iter()
        .take(TOP_MOVERS)
        .map(|c| TopMover {
            name: c.name.clone(),
            change: c.price_change_percentage_24h,
        })
        .collect();

    debug!(
        "Analysis computed: best {} ({:.2}%), worst {} ({:.2}%), average {:.2}%",
        best.name, best.price_change_percentage_24h, worst.name,
        worst.price_change_percentage_24h, average_change
    );

    Ok(AnalysisSummary {
        best_coin: best.name.clone(),
        best_change: best.price_change_percentage_24h,
        worst_coin: worst.name.clone(),
        worst_change: worst.price_change_percentage_24h,
        average_change,
        top_movers,
        coins_up,
        coins_down,
        mood: MarketMood::from_average(average_change),
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn coin(name: &str, change: f64) -> CoinRecord {
        CoinRecord {
            id: name.to_lowercase(),
            symbol: name.to_lowercase(),
            name: name.to_string(),
            current_price: 10.0,
            price_change_percentage_24h: change,
            market_cap: 1_000.0,
            market_cap_rank: 1,
            total_volume: 100.0,
            circulating_supply: 1_000.0,
            ath: 20.0,
            atl: 1.0,
            last_updated: Utc::now(),
        }
    }

    fn snapshot(coins: &[(&str, f64)]) -> Snapshot {
        Snapshot::new(coins.iter().map(|(n, c)| coin(n, *c)).collect())
    }

    #[test]
    fn test_three_coin_scenario() {
        // Third coin's change arrives null upstream and ingests as 0.0
        let snap = snapshot(&[("A", 5.0), ("B", -3.0), ("C", 0.0)]);
        let summary = analyze(&snap).unwrap();

        assert_eq!(summary.best_coin, "A");
        assert_eq!(summary.best_change, 5.0);
        assert_eq!(summary.worst_coin, "B");
        assert_eq!(summary.worst_change, -3.0);
        assert!((summary.average_change - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.coins_up, 1);
        assert_eq!(summary.coins_down, 1);
        assert_eq!(summary.top_movers.len(), 3);
        assert_eq!(summary.top_movers[1].name, "C");
        assert_eq!(summary.top_movers[2].name, "B");
    }

    #[test]
    fn test_best_equals_top1() {
        let snap = snapshot(&[("A", 1.0), ("B", 7.5), ("C", -2.0), ("D", 3.0)]);
        let summary = analyze(&snap).unwrap();

        assert_eq!(summary.best_coin, summary.top_movers[0].name);
        assert_eq!(summary.best_change, summary.top_movers[0].change);
    }

    #[test]
    fn test_bounds_hold_for_every_record() {
        let snap = snapshot(&[("A", 1.0), ("B", -4.2), ("C", 9.9), ("D", 0.0)]);
        let summary = analyze(&snap).unwrap();

        for (_, change) in [("A", 1.0), ("B", -4.2), ("C", 9.9), ("D", 0.0)] {
            assert!(summary.best_change >= change);
            assert!(summary.worst_change <= change);
        }
    }

    #[test]
    fn test_ties_resolve_to_snapshot_order() {
        let snap = snapshot(&[("A", 5.0), ("B", 5.0), ("C", -1.0), ("D", -1.0)]);
        let summary = analyze(&snap).unwrap();

        assert_eq!(summary.best_coin, "A");
        assert_eq!(summary.worst_coin, "C");
        assert_eq!(summary.top_movers[0].name, "A");
        assert_eq!(summary.top_movers[1].name, "B");
    }

    #[test]
    fn test_zero_change_counted_in_neither_direction() {
        let snap = snapshot(&[("A", 2.0), ("B", 0.0), ("C", -2.0)]);
        let summary = analyze(&snap).unwrap();

        assert_eq!(summary.coins_up, 1);
        assert_eq!(summary.coins_down, 1);
        assert!(summary.coins_up + summary.coins_down <= snap.len());
    }

    #[test]
    fn test_short_snapshot_truncates_top_movers() {
        let snap = snapshot(&[("A", 2.0), ("B", 1.0)]);
        let summary = analyze(&snap).unwrap();

        assert_eq!(summary.top_movers.len(), 2);
        assert_eq!(summary.best_coin, "A");
        assert_eq!(summary.worst_coin, "B");
    }

    #[test]
    fn test_empty_snapshot_is_an_error() {
        let err = analyze(&snapshot(&[])).unwrap_err();
        assert!(matches!(err, Error::EmptySnapshot));
    }

    #[test]
    fn test_mood_follows_average() {
        let bullish = analyze(&snapshot(&[("A", 2.0), ("B", 1.0)])).unwrap();
        assert_eq!(bullish.mood, MarketMood::Bullish);

        let bearish = analyze(&snapshot(&[("A", -2.0), ("B", -1.0)])).unwrap();
        assert_eq!(bearish.mood, MarketMood::Bearish);

        let steady = analyze(&snapshot(&[("A", 0.2), ("B", -0.2)])).unwrap();
        assert_eq!(steady.mood, MarketMood::Steady);
    }
}
