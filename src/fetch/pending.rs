// fetch/pending.rs
//
// Fetchers whose page was rendered before their read settled. The htmx poll
// for the same query resumes the parked fetcher instead of asking the API
// again. Only unsettled fetchers are kept, so this never serves as a cache.

use crate::fetch::ListingFetcher;
use crate::search::QueryString;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

/// A parked fetcher nobody came back for is dropped after this long.
const PARK_LIMIT: Duration = Duration::from_secs(60);

#[derive(Default)]
pub struct PendingFetches {
    parked: Mutex<HashMap<QueryString, (Instant, ListingFetcher)>>,
}

impl PendingFetches {
    /// Keep a still-loading fetcher for the next request of its query.
    pub fn park(&self, mut fetcher: ListingFetcher) {
        fetcher.poll();
        if fetcher.state().is_settled() {
            return;
        }
        let Some(query) = fetcher.active_query().cloned() else {
            return;
        };

        let mut parked = self.lock();
        parked.retain(|_, (at, f)| {
            f.poll();
            !f.state().is_settled() && at.elapsed() < PARK_LIMIT
        });
        debug!(%query, parked = parked.len() + 1, "parking unsettled fetch");
        parked.insert(query, (Instant::now(), fetcher));
    }

    /// Take back the fetcher parked for `query`, if any.
    pub fn take(&self, query: &QueryString) -> Option<ListingFetcher> {
        let (at, fetcher) = self.lock().remove(query)?;
        (at.elapsed() < PARK_LIMIT).then_some(fetcher)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<QueryString, (Instant, ListingFetcher)>> {
        self.parked.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
