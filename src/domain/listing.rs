use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub const PLACEHOLDER_IMAGE: &str = "/static/placeholder.jpg";

fn default_currency() -> String {
    "SUI".to_string()
}

/// A property as returned by `GET /api/v1/properties`. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bedrooms: i64,
    #[serde(default)]
    pub bathrooms: i64,
    #[serde(default)]
    pub area: f64,

    // IPFS content ids, first one is the cover
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub is_listed: bool,

    pub property_type: Option<String>,
    pub token_id: Option<String>,
    pub owner_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Accepts RFC 3339 and zone-less ISO timestamps (read as UTC). Anything else
/// becomes `None` instead of failing the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl ListingRecord {
    /// Link target of the per-listing detail route.
    pub fn detail_href(&self) -> String {
        format!("/properties/{}", self.id)
    }

    pub fn cover_image(&self, gateway: &ImageGateway) -> String {
        gateway.resolve(self.images.first().map(String::as_str))
    }
}

/// Resolves image content ids against the configured IPFS gateway.
#[derive(Debug, Clone)]
pub struct ImageGateway {
    base_url: String,
}

impl ImageGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, cid: Option<&str>) -> String {
        match cid.filter(|c| !c.is_empty()) {
            Some(cid) => format!("{}/ipfs/{}", self.base_url, cid),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}
