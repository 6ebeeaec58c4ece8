//! In-memory caching layer for market snapshots

use cryptoprice_core::Snapshot;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached snapshot with expiration
struct CacheEntry {
    snapshot: Snapshot,
    inserted_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() > ttl
    }
}

/// Thread-safe single-slot snapshot cache with TTL
///
/// The market request carries no caller-supplied parameters, so one slot is
/// the whole cache: a stored snapshot answers every call until it expires.
pub struct SnapshotCache {
    slot: RwLock<Option<CacheEntry>>,
    ttl: Duration,
}

impl SnapshotCache {
    /// Create a cache with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Get the cached snapshot if not expired
    pub fn get(&self) -> Option<Snapshot> {
        let slot = self.slot.read().ok()?;
        let entry = slot.as_ref()?;

        if entry.is_expired(self.ttl) {
            None
        } else {
            Some(entry.snapshot.clone())
        }
    }

    /// Store a snapshot, replacing whatever was cached before
    pub fn store(&self, snapshot: Snapshot) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(CacheEntry {
                snapshot,
                inserted_at: Instant::now(),
            });
        }
    }

    /// Drop the cached snapshot
    pub fn invalidate(&self) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = None;
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        // 30 second TTL bounds the request rate under the shell's refresh timer
        Self::new(Duration::from_secs(30))
    }
}
