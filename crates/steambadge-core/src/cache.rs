//! Injectable profile cache.
//!
//! The fetch layer caches resolved [`DisplayFields`] per SteamID64 so a badge
//! embedded in a README does not hammer the Steam Web API on every view. The
//! cache is an explicit value handed to the fetch layer, never process-global
//! state; callers that fetch concurrently own their own synchronization.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::fields::DisplayFields;
use crate::steamid::SteamId64;

pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

pub trait ProfileCache {
    /// Returns the cached record unless its TTL has elapsed.
    fn get(&mut self, id: &SteamId64) -> Option<&DisplayFields>;
    fn set(&mut self, id: SteamId64, fields: DisplayFields);
    /// Drops every expired entry.
    fn purge_expired(&mut self);
}

struct Entry {
    stored_at: Instant,
    fields: DisplayFields,
}

/// Time-to-live map over [`FxHashMap`]. Expiry is lazy: an expired entry is
/// removed the next time it is looked up, or by [`ProfileCache::purge_expired`].
pub struct TtlCache {
    ttl: Duration,
    entries: FxHashMap<SteamId64, Entry>,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: FxHashMap::default(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ProfileCache for TtlCache {
    fn get(&mut self, id: &SteamId64) -> Option<&DisplayFields> {
        let expired = match self.entries.get(id) {
            Some(entry) => entry.stored_at.elapsed() > self.ttl,
            None => return None,
        };
        if expired {
            self.entries.remove(id);
            tracing::debug!(id = %id, "evicted expired profile cache entry");
            return None;
        }
        self.entries.get(id).map(|entry| &entry.fields)
    }

    fn set(&mut self, id: SteamId64, fields: DisplayFields) {
        self.entries.insert(
            id,
            Entry {
                stored_at: Instant::now(),
                fields,
            },
        );
    }

    fn purge_expired(&mut self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() <= ttl);
    }
}
