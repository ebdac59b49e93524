// src/search/form.rs

use crate::domain::{FilterField, FilterState};
use crate::search::address::{Address, Location};
use crate::search::query::{self, QueryString};
use tracing::info;
use url::form_urlencoded;

/// Raw text of every search field, as the user typed it.
///
/// Nothing is validated here; the text is only interpreted when the form is
/// submitted, through the same field table the query codec uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFormController {
    values: [String; FilterField::COUNT],
}

impl SearchFormController {
    /// Field defaults come from the address the form is shown on.
    pub fn from_address(address: &impl Address) -> Self {
        Self::from_state(&query::decode(address.current_query().as_str()))
    }

    pub fn from_state(state: &FilterState) -> Self {
        let mut form = Self::default();
        for field in FilterField::ALL {
            form.set_field(field, field.value(state).unwrap_or_default());
        }
        form
    }

    /// Fill from an urlencoded POST body keyed by the canonical names.
    /// Unknown keys are ignored; a repeated key keeps the last value.
    pub fn from_form_body(body: &str) -> Self {
        let mut form = Self::default();
        for (key, value) in form_urlencoded::parse(body.as_bytes()) {
            if let Some(field) = FilterField::from_key(&key) {
                form.set_field(field, value.into_owned());
            }
        }
        form
    }

    pub fn field(&self, field: FilterField) -> &str {
        &self.values[field as usize]
    }

    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.values[field as usize] = value.into();
    }

    /// Parse the current field text. Empty or unparseable entries become
    /// "no constraint", never zero.
    pub fn filter_state(&self) -> FilterState {
        let mut state = FilterState::default();
        for field in FilterField::ALL {
            field.assign(&mut state, self.field(field));
        }
        state.normalized()
    }

    pub fn query(&self) -> QueryString {
        query::encode(&self.filter_state())
    }

    /// Encode the fields and navigate to the listings route. Always succeeds.
    pub fn submit(&self, address: &mut impl Address) -> Location {
        let target = Location::listings(self.query());
        info!(href = %target.href(), "search submitted");
        address.navigate(target.clone());
        target
    }
}
