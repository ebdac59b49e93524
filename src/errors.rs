use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, bad input).
/// Listing fetch failures are not here: they render as part of the page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
