use thiserror::Error;

/// Everything that can go wrong reading listings. None of it is fatal:
/// it ends up as `FetchState::Failure` and the user can search again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listings API returned HTTP {0}")]
    Status(u16),
    #[error("Malformed listings response: {0}")]
    Decode(String),
    #[error("Fetch worker failed: {0}")]
    Worker(String),
}

impl FetchError {
    /// Text shown to the user regardless of the cause.
    pub fn user_message(&self) -> &'static str {
        "Failed to load properties. Please try again later."
    }
}
