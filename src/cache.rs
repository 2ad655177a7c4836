//! Optional caching collaborator for resolutions.
//!
//! The reference pipeline is stateless: every call re-fetches from the
//! network. Callers that want staleness-bounded reuse inject a
//! [`ResolutionCache`] via [`HolidayResolver::with_cache`](crate::HolidayResolver::with_cache)
//! instead of the crate keeping module-level mutable state. [`NoCache`] is
//! the default; [`MemoryCache`] is a keyed, time-bounded in-process map.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::entry::GroupedHolidays;

/// Keyed cache of grouped resolutions, one slot per calendar date.
#[async_trait]
pub trait ResolutionCache: Send + Sync {
    async fn get(&self, date: NaiveDate) -> Option<GroupedHolidays>;
    async fn put(&self, date: NaiveDate, value: GroupedHolidays);
}

/// The default: never hits, never stores.
pub struct NoCache;

#[async_trait]
impl ResolutionCache for NoCache {
    async fn get(&self, _date: NaiveDate) -> Option<GroupedHolidays> {
        None
    }

    async fn put(&self, _date: NaiveDate, _value: GroupedHolidays) {}
}

/// In-process cache with a fixed time-to-live per entry. Expired entries
/// are dropped on lookup.
pub struct MemoryCache {
    ttl: Duration,
    entries: Mutex<HashMap<NaiveDate, (Instant, GroupedHolidays)>>,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ResolutionCache for MemoryCache {
    async fn get(&self, date: NaiveDate) -> Option<GroupedHolidays> {
        let mut entries = self.entries.lock().await;
        match entries.get(&date) {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value.clone()),
            Some(_) => {
                entries.remove(&date);
                None
            }
            None => None,
        }
    }

    async fn put(&self, date: NaiveDate, value: GroupedHolidays) {
        self.entries
            .lock()
            .await
            .insert(date, (Instant::now(), value));
    }
}
