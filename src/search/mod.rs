pub mod address;
pub mod form;
pub mod query;

pub use address::{Address, History, Location, RequestAddress, LISTINGS_PATH};
pub use form::SearchFormController;
pub use query::QueryString;
