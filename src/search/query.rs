// src/search/query.rs
//
// FilterState <-> canonical query string. Both directions walk
// `FilterField::ALL`, so keys, order and defaults can't drift apart.

use crate::domain::{FilterField, FilterState};
use std::collections::HashSet;
use std::fmt;
use url::form_urlencoded;

/// Canonical, urlencoded filter query (no leading `?`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryString(String);

impl QueryString {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap a raw query taken from an address. Not re-canonicalized.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.trim_start_matches('?').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decoded key/value pairs in their serialized order.
    pub fn pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.0.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    /// `path` with this query appended, or the bare path when empty.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.0)
        }
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn encode(state: &FilterState) -> QueryString {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for field in FilterField::ALL {
        if let Some(value) = field.value(state) {
            serializer.append_pair(field.key(), &value);
        }
    }

    QueryString(serializer.finish())
}

/// Never fails: unknown keys are skipped, bad values fall back to the
/// field default, and only the first occurrence of a key counts.
pub fn decode(query: &str) -> FilterState {
    let mut state = FilterState::default();
    let mut seen = HashSet::new();

    let query = query.trim_start_matches('?');
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let Some(field) = FilterField::from_key(&key) else {
            continue;
        };
        if seen.insert(field) {
            field.assign(&mut state, &value);
        }
    }

    state
}
