// src/app.rs
use crate::config::AppConfig;
use crate::domain::ImageGateway;
use crate::fetch::{FetchError, ListingApiClient, ListingSource, PendingFetches};
use std::sync::Arc;
use std::time::Duration;

/// Everything a request handler needs, shared by all server workers.
#[derive(Clone)]
pub struct App {
    pub source: Arc<dyn ListingSource>,
    pub gateway: ImageGateway,
    pub render_wait: Duration,
    /// Fetches still loading when their page was rendered.
    pub pending: Arc<PendingFetches>,
}

impl App {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, FetchError> {
        let client = ListingApiClient::new(&cfg.api_base, cfg.fetch_timeout)?;

        Ok(Self::with_source(
            Arc::new(client),
            ImageGateway::new(cfg.ipfs_gateway.as_str()),
            cfg.render_wait,
        ))
    }

    pub fn with_source(
        source: Arc<dyn ListingSource>,
        gateway: ImageGateway,
        render_wait: Duration,
    ) -> Self {
        Self {
            source,
            gateway,
            render_wait,
            pending: Arc::new(PendingFetches::default()),
        }
    }
}
