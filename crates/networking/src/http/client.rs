//! CoinGecko HTTP client for market snapshots

use cryptoprice_core::{CoinRecord, Error, Result, Snapshot};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::cache::SnapshotCache;

const API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Fixed query: top-50 by market cap, priced in USD, 24h change window
const MARKET_QUERY: [(&str, &str); 5] = [
    ("vs_currency", "usd"),
    ("order", "market_cap_desc"),
    ("per_page", "50"),
    ("page", "1"),
    ("price_change_percentage", "24h"),
];

// reqwest applies no timeout unless one is set
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the CoinGecko markets endpoint
///
/// Holds a single-slot snapshot cache so repeated calls inside the TTL
/// window answer without a network round-trip. Never retries: a failed
/// request surfaces immediately and the shell's refresh timer is the only
/// retry mechanism.
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
    cache: SnapshotCache,
}

impl CoinGeckoClient {
    /// Create a client against the public CoinGecko API
    pub fn new() -> Self {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a non-default endpoint (test servers)
    pub fn with_base_url(base_url: &str) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: SnapshotCache::default(),
        }
    }

    /// Replace the cache TTL (tests use `Duration::ZERO`)
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = SnapshotCache::new(ttl);
        self
    }

    /// Fetch the current market snapshot (cache-aware)
    ///
    /// Returns the cached snapshot while one is inside the TTL window;
    /// otherwise performs exactly one request and caches the result.
    #[instrument(skip(self))]
    pub async fn fetch_markets(&self) -> Result<Snapshot> {
        if let Some(snapshot) = self.cache.get() {
            debug!("Snapshot cache hit ({} coins)", snapshot.len());
            return Ok(snapshot);
        }

        let url = format!("{}/coins/markets", self.base_url);
        debug!("Fetching market snapshot from: {}", url);

        let response = self.http.get(&url).query(&MARKET_QUERY).send().await?;

        let response = response.error_for_status().map_err(|e| {
            error!("Market request failed: {}", e);
            Error::ApiError(e.to_string())
        })?;

        let coins: Vec<CoinRecord> = response.json().await.map_err(|e| {
            error!("Failed to parse market response: {}", e);
            Error::InvalidData(e.to_string())
        })?;

        let snapshot = Snapshot::new(coins);
        debug!("Market snapshot fetched: {} coins", snapshot.len());

        self.cache.store(snapshot.clone());
        Ok(snapshot)
    }

    /// Drop the cached snapshot so the next fetch hits the network
    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
