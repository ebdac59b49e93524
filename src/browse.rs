// src/browse.rs
//
// One browsing context: the address, the search form shown on it and the
// listing fetch driven by it. Every change of address goes through here so
// the three stay in step.

use crate::fetch::{FetchState, ListingFetcher, ListingSource};
use crate::search::{Address, History, Location, QueryString, SearchFormController};
use std::sync::Arc;
use std::time::Duration;

pub struct BrowseSession<A: Address> {
    address: A,
    form: SearchFormController,
    fetcher: ListingFetcher,
}

impl<A: Address> BrowseSession<A> {
    /// Mount on `address`: form defaults come from its query and the first
    /// fetch starts immediately. Fetches always use the canonical form of
    /// the address query, so junk in the address degrades the same way the
    /// form does.
    pub fn open(address: A, source: Arc<dyn ListingSource>) -> Self {
        let mut session = Self {
            form: SearchFormController::from_address(&address),
            fetcher: ListingFetcher::new(source),
            address,
        };
        session.sync_fetch();
        session
    }

    /// Mount on `address` with a fetcher carried over from an earlier
    /// request. It is only re-issued if it holds a different query.
    pub fn resume(address: A, fetcher: ListingFetcher) -> Self {
        let mut session = Self {
            form: SearchFormController::from_address(&address),
            fetcher,
            address,
        };
        session.sync_fetch();
        session
    }

    pub fn into_fetcher(self) -> ListingFetcher {
        self.fetcher
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn form(&self) -> &SearchFormController {
        &self.form
    }

    /// Edits to the fields stay local until `submit`.
    pub fn form_mut(&mut self) -> &mut SearchFormController {
        &mut self.form
    }

    pub fn fetcher(&self) -> &ListingFetcher {
        &self.fetcher
    }

    pub fn state(&self) -> &FetchState {
        self.fetcher.state()
    }

    /// The query the shown results belong to.
    pub fn active_query(&self) -> QueryString {
        self.fetcher.active_query().cloned().unwrap_or_default()
    }

    pub fn submit(&mut self) -> Location {
        let target = self.form.submit(&mut self.address);
        self.fetcher.sync(&target.query);
        target
    }

    pub fn wait(&mut self, timeout: Duration) -> &FetchState {
        self.fetcher.wait_settled(timeout)
    }

    pub fn retry(&mut self) -> bool {
        self.fetcher.refresh()
    }

    /// Re-derive everything from the address after it changed underneath us.
    fn address_changed(&mut self) {
        self.form = SearchFormController::from_address(&self.address);
        self.sync_fetch();
    }

    fn sync_fetch(&mut self) {
        let query = self.form.query();
        self.fetcher.sync(&query);
    }
}

impl BrowseSession<History> {
    pub fn back(&mut self) -> bool {
        let moved = self.address.back();
        if moved {
            self.address_changed();
        }
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.address.forward();
        if moved {
            self.address_changed();
        }
        moved
    }
}
