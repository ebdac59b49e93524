mod client;
mod fetch_error;
mod fetcher;
mod pending;
mod source;

pub use client::ListingApiClient;
pub use fetch_error::FetchError;
pub use fetcher::{FetchState, ListingFetcher, Settled};
pub use pending::PendingFetches;
pub use source::ListingSource;

#[cfg(test)]
pub(crate) use fetcher::testing;
