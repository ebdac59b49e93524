pub mod home;
pub mod properties;

pub use home::home_page;
pub use properties::{listing_view, properties_page, RESULTS_PATH};
