pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use redirect::redirect_response;
