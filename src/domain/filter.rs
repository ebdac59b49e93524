// src/domain/filter.rs

use std::fmt;

/// Property categories offered by the search form. `Any` is the
/// "no constraint" value and never reaches the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyType {
    #[default]
    Any,
    House,
    Apartment,
    Condo,
    Villa,
    Land,
    Commercial,
}

impl PropertyType {
    pub const ALL: [PropertyType; 7] = [
        PropertyType::Any,
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Condo,
        PropertyType::Villa,
        PropertyType::Land,
        PropertyType::Commercial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Any => "Any",
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Condo => "Condo",
            PropertyType::Villa => "Villa",
            PropertyType::Land => "Land",
            PropertyType::Commercial => "Commercial",
        }
    }

    /// Case-insensitive lookup. Unknown names are `None`.
    pub fn parse(raw: &str) -> Option<PropertyType> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user can filter on. A `None` field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: Option<String>,
    pub location: Option<String>,
    pub property_type: PropertyType,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_area: Option<f64>,
    pub max_area: Option<f64>,
}

impl FilterState {
    /// Collapse values that mean "no constraint" into `None`.
    pub fn normalized(mut self) -> Self {
        for field in FilterField::ALL {
            if field.value(&self).is_none() {
                field.clear(&mut self);
            }
        }
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        FilterField::ALL.iter().all(|f| f.value(self).is_none())
    }
}

/// How a field's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    Count,
    Amount,
}

/// The canonical filter keys, in the order they are serialized.
///
/// This is the one place that knows each key, its default and how raw text
/// is parsed into it. The query codec and the search form both go through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Query,
    Location,
    PropertyType,
    Bedrooms,
    Bathrooms,
    MinPrice,
    MaxPrice,
    MinArea,
    MaxArea,
}

impl FilterField {
    pub const COUNT: usize = 9;

    pub const ALL: [FilterField; Self::COUNT] = [
        FilterField::Query,
        FilterField::Location,
        FilterField::PropertyType,
        FilterField::Bedrooms,
        FilterField::Bathrooms,
        FilterField::MinPrice,
        FilterField::MaxPrice,
        FilterField::MinArea,
        FilterField::MaxArea,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Query => "query",
            FilterField::Location => "location",
            FilterField::PropertyType => "property_type",
            FilterField::Bedrooms => "bedrooms",
            FilterField::Bathrooms => "bathrooms",
            FilterField::MinPrice => "min_price",
            FilterField::MaxPrice => "max_price",
            FilterField::MinArea => "min_area",
            FilterField::MaxArea => "max_area",
        }
    }

    pub fn from_key(key: &str) -> Option<FilterField> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterField::Query | FilterField::Location => FieldKind::Text,
            FilterField::PropertyType => FieldKind::Choice,
            FilterField::Bedrooms | FilterField::Bathrooms => FieldKind::Count,
            FilterField::MinPrice
            | FilterField::MaxPrice
            | FilterField::MinArea
            | FilterField::MaxArea => FieldKind::Amount,
        }
    }

    /// Human label used by the search form.
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Query => "Search",
            FilterField::Location => "Location",
            FilterField::PropertyType => "Property Type",
            FilterField::Bedrooms => "Bedrooms",
            FilterField::Bathrooms => "Bathrooms",
            FilterField::MinPrice => "Min Price",
            FilterField::MaxPrice => "Max Price",
            FilterField::MinArea => "Min Area (m²)",
            FilterField::MaxArea => "Max Area (m²)",
        }
    }

    /// Serialized value of this field, or `None` when it holds its default.
    pub fn value(&self, state: &FilterState) -> Option<String> {
        match self {
            FilterField::Query => non_empty(&state.query),
            FilterField::Location => non_empty(&state.location),
            FilterField::PropertyType => match state.property_type {
                PropertyType::Any => None,
                other => Some(other.as_str().to_string()),
            },
            FilterField::Bedrooms => state.bedrooms.map(|n| n.to_string()),
            FilterField::Bathrooms => state.bathrooms.map(|n| n.to_string()),
            FilterField::MinPrice => format_amount(state.min_price),
            FilterField::MaxPrice => format_amount(state.max_price),
            FilterField::MinArea => format_amount(state.min_area),
            FilterField::MaxArea => format_amount(state.max_area),
        }
    }

    /// Parse `raw` into this field. Anything that does not parse leaves the
    /// field at its default; there is no error path.
    pub fn assign(&self, state: &mut FilterState, raw: &str) {
        match self {
            FilterField::Query => state.query = parse_text(raw),
            FilterField::Location => state.location = parse_text(raw),
            FilterField::PropertyType => {
                state.property_type = PropertyType::parse(raw).unwrap_or_default()
            }
            FilterField::Bedrooms => state.bedrooms = parse_count(raw),
            FilterField::Bathrooms => state.bathrooms = parse_count(raw),
            FilterField::MinPrice => state.min_price = parse_amount(raw),
            FilterField::MaxPrice => state.max_price = parse_amount(raw),
            FilterField::MinArea => state.min_area = parse_amount(raw),
            FilterField::MaxArea => state.max_area = parse_amount(raw),
        }
    }

    pub fn clear(&self, state: &mut FilterState) {
        match self {
            FilterField::Query => state.query = None,
            FilterField::Location => state.location = None,
            FilterField::PropertyType => state.property_type = PropertyType::Any,
            FilterField::Bedrooms => state.bedrooms = None,
            FilterField::Bathrooms => state.bathrooms = None,
            FilterField::MinPrice => state.min_price = None,
            FilterField::MaxPrice => state.max_price = None,
            FilterField::MinArea => state.min_area = None,
            FilterField::MaxArea => state.max_area = None,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

fn format_amount(value: Option<f64>) -> Option<String> {
    // Display never uses exponent notation and drops ".0" on integral values.
    value.filter(|v| v.is_finite()).map(|v| v.to_string())
}

fn parse_text(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_count(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
