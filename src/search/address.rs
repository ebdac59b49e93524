// src/search/address.rs

use crate::search::query::QueryString;
use tracing::debug;

pub const LISTINGS_PATH: &str = "/properties";

/// A navigable address: path plus (canonical or raw) query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryString,
}

impl Location {
    pub fn new(path: impl Into<String>, query: QueryString) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn listings(query: QueryString) -> Self {
        Self::new(LISTINGS_PATH, query)
    }

    /// Split `"/path?query"` into its parts.
    pub fn parse(href: &str) -> Self {
        match href.split_once('?') {
            Some((path, query)) => Self::new(path, QueryString::from_raw(query)),
            None => Self::new(href, QueryString::empty()),
        }
    }

    pub fn href(&self) -> String {
        self.query.append_to(&self.path)
    }
}

/// Read/write access to the current address.
///
/// Navigation is the only writer. Everything else reads `current_query`.
pub trait Address {
    fn current(&self) -> &Location;

    fn navigate(&mut self, to: Location);

    fn current_query(&self) -> QueryString {
        self.current().query.clone()
    }
}

/// In-memory address with browser-style back/forward.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(start: Location) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        debug!(href = %self.current().href(), "history back");
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        debug!(href = %self.current().href(), "history forward");
        true
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Address for History {
    fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Push a new entry, dropping any forward entries.
    fn navigate(&mut self, to: Location) {
        debug!(href = %to.href(), "navigate");
        self.entries.truncate(self.index + 1);
        self.entries.push(to);
        self.index = self.entries.len() - 1;
    }
}

/// The address of one HTTP request. Navigating records a redirect target
/// instead of changing what the request asked for.
#[derive(Debug, Clone)]
pub struct RequestAddress {
    location: Location,
    redirect: Option<Location>,
}

impl RequestAddress {
    pub fn new(path: &str, query: Option<&str>) -> Self {
        Self {
            location: Location::new(path, QueryString::from_raw(query.unwrap_or_default())),
            redirect: None,
        }
    }

    pub fn redirect(&self) -> Option<&Location> {
        self.redirect.as_ref()
    }
}

impl Address for RequestAddress {
    fn current(&self) -> &Location {
        &self.location
    }

    fn navigate(&mut self, to: Location) {
        debug!(href = %to.href(), "redirect");
        self.redirect = Some(to);
    }
}
