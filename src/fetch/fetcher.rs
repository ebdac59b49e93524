// fetch/fetcher.rs
//
// Owns the FetchState for one view. Reads run on worker threads and report
// back over a channel; only the owner applies them, and only if they belong
// to the request that is still current.

use crate::domain::ListingRecord;
use crate::fetch::{FetchError, ListingSource};
use crate::search::QueryString;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Loading,
    Success(Vec<ListingRecord>),
    Failure(FetchError),
}

impl FetchState {
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Failure(_))
    }

    pub fn listings(&self) -> Option<&[ListingRecord]> {
        match self {
            FetchState::Success(listings) => Some(listings),
            _ => None,
        }
    }
}

/// Outcome of one worker, tagged with the request it answers.
#[derive(Debug)]
struct Settlement {
    generation: u64,
    query: QueryString,
    outcome: Result<Vec<ListingRecord>, FetchError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    Discarded,
}

pub struct ListingFetcher {
    source: Arc<dyn ListingSource>,
    state: FetchState,
    active: Option<QueryString>,
    generation: u64,
    discarded: usize,
    tx: Sender<Settlement>,
    rx: Receiver<Settlement>,
}

impl ListingFetcher {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            state: FetchState::Idle,
            active: None,
            generation: 0,
            discarded: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn active_query(&self) -> Option<&QueryString> {
        self.active.as_ref()
    }

    /// Number of results thrown away because a newer request had started.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Make `query` the active one. Starts a request only if it differs from
    /// the query already active; returns whether it did.
    pub fn sync(&mut self, query: &QueryString) -> bool {
        if self.active.as_ref() == Some(query) {
            return false;
        }
        self.active = Some(query.clone());
        self.issue();
        true
    }

    /// Re-issue the active query, e.g. after a failure.
    pub fn refresh(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.issue();
        true
    }

    fn issue(&mut self) {
        let Some(query) = self.active.clone() else {
            return;
        };

        self.generation += 1;
        self.state = FetchState::Loading;

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        info!(generation, query = %query, "fetching listings");

        let spawned = std::thread::Builder::new()
            .name(format!("listing-fetch-{generation}"))
            .spawn({
                let query = query.clone();
                move || {
                    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                        source.fetch_listings(&query)
                    }))
                    .unwrap_or_else(|payload| {
                        Err(FetchError::Worker(panic_message(payload.as_ref())))
                    });
                    // The fetcher may be gone already; nothing left to tell.
                    let _ = tx.send(Settlement {
                        generation,
                        query,
                        outcome,
                    });
                }
            });

        if let Err(e) = spawned {
            warn!(generation, "could not start fetch worker: {e}");
            self.state = FetchState::Failure(FetchError::Worker(e.to_string()));
        }
    }

    /// Apply everything that has already arrived. Never blocks.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(settlement) = self.rx.try_recv() {
            if self.settle(settlement) == Settled::Applied {
                applied += 1;
            }
        }
        applied
    }

    /// Block for the next settlement, stale or not.
    pub fn wait_next(&mut self, timeout: Duration) -> Option<Settled> {
        let settlement = self.rx.recv_timeout(timeout).ok()?;
        Some(self.settle(settlement))
    }

    /// Block until the active request settles or `timeout` passes, then
    /// return whatever the state is.
    pub fn wait_settled(&mut self, timeout: Duration) -> &FetchState {
        let deadline = Instant::now() + timeout;
        self.poll();

        while self.state == FetchState::Loading {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || self.wait_next(remaining).is_none() {
                break;
            }
        }

        &self.state
    }

    fn settle(&mut self, settlement: Settlement) -> Settled {
        let current = settlement.generation == self.generation
            && self.active.as_ref() == Some(&settlement.query);

        if !current {
            self.discarded += 1;
            debug!(
                generation = settlement.generation,
                latest = self.generation,
                query = %settlement.query,
                "discarding stale listings result"
            );
            return Settled::Discarded;
        }

        self.state = match settlement.outcome {
            Ok(listings) => {
                debug!(generation = settlement.generation, count = listings.len(), "listings loaded");
                FetchState::Success(listings)
            }
            Err(e) => {
                warn!(generation = settlement.generation, "listings fetch failed: {e}");
                FetchState::Failure(e)
            }
        };
        Settled::Applied
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    format!("fetch worker panicked: {detail}")
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    type Outcome = Result<Vec<ListingRecord>, FetchError>;

    /// A source whose responses are released by the test, one query at a
    /// time, so settlement order is fully controlled.
    #[derive(Default)]
    pub struct GatedSource {
        gates: Mutex<HashMap<String, VecDeque<Receiver<Outcome>>>>,
    }

    impl GatedSource {
        /// Queue a gate for `query` and get the handle that releases it.
        /// Requests for the same query take gates in registration order.
        pub fn gate(&self, query: &str) -> Sender<Outcome> {
            let (tx, rx) = mpsc::channel();
            self.gates
                .lock()
                .unwrap()
                .entry(query.to_string())
                .or_default()
                .push_back(rx);
            tx
        }

        /// Wait until every gate queued for `query` has been picked up by a
        /// worker.
        pub fn wait_taken(&self, query: &str) {
            let deadline = Instant::now() + Duration::from_secs(5);
            loop {
                let pending = self
                    .gates
                    .lock()
                    .unwrap()
                    .get(query)
                    .map_or(0, VecDeque::len);
                if pending == 0 {
                    return;
                }
                assert!(Instant::now() < deadline, "worker never asked for {query}");
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }

    impl ListingSource for GatedSource {
        fn fetch_listings(&self, query: &QueryString) -> Outcome {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .get_mut(query.as_str())
                .and_then(VecDeque::pop_front);
            match gate {
                Some(rx) => rx
                    .recv()
                    .unwrap_or_else(|_| Err(FetchError::Network("gate dropped".into()))),
                None => Err(FetchError::Network(format!("no gate for {query}"))),
            }
        }
    }

    /// A source that answers immediately from a fixed table.
    #[derive(Default)]
    pub struct StaticSource {
        pub responses: HashMap<String, Outcome>,
        pub fallback: Vec<ListingRecord>,
    }

    impl ListingSource for StaticSource {
        fn fetch_listings(&self, query: &QueryString) -> Outcome {
            self.responses
                .get(query.as_str())
                .cloned()
                .unwrap_or_else(|| Ok(self.fallback.clone()))
        }
    }

    /// A source whose every read panics.
    pub struct PanickingSource;

    impl ListingSource for PanickingSource {
        fn fetch_listings(&self, query: &QueryString) -> Outcome {
            panic!("listing source blew up on {query}");
        }
    }

    pub fn listing(id: i64, title: &str, is_listed: bool) -> ListingRecord {
        ListingRecord {
            id,
            title: title.to_string(),
            description: String::new(),
            price: 1000.0 * id as f64,
            currency: "SUI".to_string(),
            location: "Lisbon".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            area: 70.0,
            images: Vec::new(),
            is_listed,
            property_type: None,
            token_id: None,
            owner_address: None,
            created_at: None,
        }
    }
}
