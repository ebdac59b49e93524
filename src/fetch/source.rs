use crate::domain::ListingRecord;
use crate::fetch::FetchError;
use crate::search::QueryString;

/// Read side of the remote listing catalog.
///
/// Implementations block; the fetcher runs them off the owning thread.
pub trait ListingSource: Send + Sync {
    fn fetch_listings(&self, query: &QueryString) -> Result<Vec<ListingRecord>, FetchError>;
}
