// fetch/client.rs
use crate::domain::ListingRecord;
use crate::fetch::{FetchError, ListingSource};
use crate::search::QueryString;
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str = concat!("listing-browser/", env!("CARGO_PKG_VERSION"));

const PROPERTIES_PATH: &str = "api/v1/properties";

/// `ListingSource` backed by the listings HTTP API.
pub struct ListingApiClient {
    client: Client,
    endpoint: Url,
}

impl ListingApiClient {
    pub fn new(api_base: &Url, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: properties_endpoint(api_base)?,
        })
    }

    /// Full request URL for `query`, without a `?` when it is empty.
    pub fn url_for(&self, query: &QueryString) -> Url {
        let mut url = self.endpoint.clone();
        if !query.is_empty() {
            url.set_query(Some(query.as_str()));
        }
        url
    }
}

impl ListingSource for ListingApiClient {
    fn fetch_listings(&self, query: &QueryString) -> Result<Vec<ListingRecord>, FetchError> {
        let url = self.url_for(query);
        let start = Instant::now();

        let resp = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();

        let text = resp
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "listings API returned an error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let listings: Vec<ListingRecord> =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(%url, count = listings.len(), elapsed = ?start.elapsed(), "listings fetched");
        Ok(listings)
    }
}

fn properties_endpoint(api_base: &Url) -> Result<Url, FetchError> {
    // Keep any path prefix on the base: join() replaces the last segment
    // unless it ends with a slash.
    let mut base = api_base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(PROPERTIES_PATH)
        .map_err(|e| FetchError::Network(format!("bad listings API URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ListingApiClient {
        let base = Url::parse(base).unwrap();
        ListingApiClient::new(&base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn builds_endpoint_under_base_path() {
        let c = client("http://localhost:8000");
        assert_eq!(
            c.url_for(&QueryString::empty()).as_str(),
            "http://localhost:8000/api/v1/properties"
        );

        let c = client("https://example.com/backend");
        assert_eq!(
            c.url_for(&QueryString::from_raw("bedrooms=2&location=Oslo")).as_str(),
            "https://example.com/backend/api/v1/properties?bedrooms=2&location=Oslo"
        );
    }

    #[test]
    fn unreachable_api_is_a_network_error() {
        // Port 9 (discard) on localhost is not expected to be listening.
        let c = client("http://127.0.0.1:9");
        let err = c.fetch_listings(&QueryString::empty()).unwrap_err();
        assert!(matches!(err, FetchError::Network(_)), "{err:?}");
    }
}
