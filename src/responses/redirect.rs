use crate::errors::{ResultResp, ServerError};
use crate::search::Location;
use astra::{Body, ResponseBuilder};

/// `303 See Other` so a POSTed search lands on a plain GET of `to`.
pub fn redirect_response(to: &Location) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", to.href())
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
