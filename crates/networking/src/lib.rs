//! CryptoPrice Networking - CoinGecko HTTP client and snapshot cache

pub mod cache;
pub mod http;

pub use cache::SnapshotCache;
pub use http::CoinGeckoClient;
