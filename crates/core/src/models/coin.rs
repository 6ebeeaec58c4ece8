//! Coin market models deserialized from the CoinGecko `/coins/markets` endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a market snapshot
///
/// Field names match the CoinGecko response. The 24h change is the only
/// field the API nulls out in practice; it is coerced to `0.0` here, at
/// ingestion, so every consumer downstream sees a plain number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinRecord {
    /// Technical id, unique within a snapshot (e.g. `"bitcoin"`)
    pub id: String,
    pub symbol: String,
    /// Display name (e.g. `"Bitcoin"`)
    pub name: String,
    /// Current price in USD
    pub current_price: f64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub price_change_percentage_24h: f64,
    pub market_cap: f64,
    /// Rank by market cap, >= 1. Ties possible; source order is preserved.
    pub market_cap_rank: u32,
    pub total_volume: f64,
    pub circulating_supply: f64,
    /// All-time-high price in USD
    pub ath: f64,
    /// All-time-low price in USD
    pub atl: f64,
    /// Source-provided last update time
    pub last_updated: DateTime<Utc>,
}

/// One atomically fetched market snapshot
///
/// Immutable once produced: a new fetch builds a wholly new snapshot,
/// never a mutation of the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub coins: Vec<CoinRecord>,
    /// Wall-clock time the snapshot was fetched
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Wrap freshly fetched records, stamping the fetch time
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        Self {
            coins,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Deserialize an f64 that may arrive as a number, string, or null
fn deserialize_f64_lenient<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    struct F64Lenient;

    impl<'de> de::Visitor<'de> for F64Lenient {
        type Value = f64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a number, string, or null")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<f64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<f64, E> {
            Ok(v as f64)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<f64, E> {
            v.parse::<f64>().map_err(de::Error::custom)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<f64, E> {
            Ok(0.0)
        }
    }

    deserializer.deserialize_any(F64Lenient)
}
