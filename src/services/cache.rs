//! In-process TTL cache for upstream registry responses.
//!
//! A performance optimization, not a correctness requirement: entries
//! are keyed by the normalized RUC and expire lazily on read. A TTL of
//! zero disables caching entirely.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::services::sunat::SunatRucPayload;

struct CacheEntry {
    stored_at: Instant,
    payload: SunatRucPayload,
}

pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a cached payload, dropping it if its TTL has elapsed.
    pub async fn get(&self, ruc: &str) -> Option<SunatRucPayload> {
        if self.ttl.is_zero() {
            return None;
        }

        {
            let entries = self.entries.read().await;
            match entries.get(ruc) {
                Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                    return Some(entry.payload.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: take the write lock to evict.
        self.entries.write().await.remove(ruc);
        None
    }

    pub async fn insert(&self, ruc: &str, payload: SunatRucPayload) {
        if self.ttl.is_zero() {
            return;
        }

        self.entries.write().await.insert(
            ruc.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                payload,
            },
        );
    }
}
